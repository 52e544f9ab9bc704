//! Pairing of declared application sources with update declarations.

use crate::application::ApplicationSource;
use crate::freight::FreightOrigin;
use crate::source_key::SourceKey;
use crate::update::config::{AppUpdate, SourceUpdate};

/// Which origin a source's revision may come from, and why.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OriginScope<'a> {
    /// No selector anywhere; every origin in the collection is eligible.
    Unset,
    /// The app's default selector (possibly inherited from the step).
    AppDefault(&'a FreightOrigin),
    /// The governing declaration's own selector.
    Explicit(&'a FreightOrigin),
}

impl<'a> OriginScope<'a> {
    /// The origin to restrict lookups to, if any.
    pub fn origin(&self) -> Option<&'a FreightOrigin> {
        match *self {
            OriginScope::Unset => None,
            OriginScope::AppDefault(origin) | OriginScope::Explicit(origin) => Some(origin),
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Result of matching one declared source.
pub struct SourceMatch<'a> {
    pub declaration: Option<&'a SourceUpdate>,
    pub scope: OriginScope<'a>,
}

impl AppUpdate {
    /// Find the declaration governing `source` and the origin scope it implies.
    ///
    /// The first declaration whose canonical key equals the source's wins. A
    /// source with no declaration still resolves, scoped by the app default.
    pub fn match_source(&self, source: &ApplicationSource) -> SourceMatch<'_> {
        let declaration = SourceKey::for_source(&source.repo_url, &source.chart).and_then(|key| {
            self.sources.iter().find(|declared| {
                SourceKey::for_source(&declared.repo_url, &declared.chart).as_ref() == Some(&key)
            })
        });

        let app_default = self.from_origin.as_ref().map(OriginScope::AppDefault);
        let scope = declaration
            .and_then(|declared| declared.from_origin.as_ref().map(OriginScope::Explicit))
            .or(app_default)
            .unwrap_or(OriginScope::Unset);

        SourceMatch { declaration, scope }
    }
}
