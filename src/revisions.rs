//! Desired revision resolution.
//!
//! For every declared source of an application, in order, pick the revision
//! the freight says it should run: a commit id for git sources, a chart
//! version for chart sources, or `""` when nothing matches. A miss never
//! fails the call; the caller leaves such sources at their live revision.

use crate::application::{Application, ApplicationSource};
use crate::freight::{ArtifactIndex, FreightCollection, FreightOrigin};
use crate::source_key::SourceKey;
use crate::update::AppUpdate;
use anyhow::{Result, bail};

/// Resolve one revision per declared source of `application`.
///
/// A missing application or one without sources yields an empty list.
pub fn desired_revisions(
    application: Option<&Application>,
    update: &AppUpdate,
    freight: &FreightCollection,
) -> Result<Vec<String>> {
    match application {
        Some(application) => resolve_sources(application.declared_sources(), update, freight),
        None => Ok(Vec::new()),
    }
}

/// Resolve revisions for an explicit source list.
///
/// The output has the same length and order as `sources`. Errors only come
/// from malformed origin selectors in `update`, and abort the whole call.
pub fn resolve_sources(
    sources: &[ApplicationSource],
    update: &AppUpdate,
    freight: &FreightCollection,
) -> Result<Vec<String>> {
    if sources.is_empty() {
        return Ok(Vec::new());
    }
    validate_selectors(update)?;

    let index = ArtifactIndex::build(freight);
    let revisions = sources
        .iter()
        .map(|source| {
            let matched = update.match_source(source);
            SourceKey::for_source(&source.repo_url, &source.chart)
                .and_then(|key| index.lookup(matched.scope.origin(), &key))
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    Ok(revisions)
}

fn validate_selectors(update: &AppUpdate) -> Result<()> {
    if let Some(origin) = &update.from_origin {
        validate_origin(origin, &format!("app '{}'", update.name))?;
    }
    for (idx, source) in update.sources.iter().enumerate() {
        if let Some(origin) = &source.from_origin {
            validate_origin(
                origin,
                &format!("app '{}' source {idx} ({})", update.name, source.repo_url),
            )?;
        }
    }
    Ok(())
}

fn validate_origin(origin: &FreightOrigin, owner: &str) -> Result<()> {
    if origin.kind.as_str().trim().is_empty() {
        bail!("{owner}: fromOrigin.kind must not be empty");
    }
    if origin.name.trim().is_empty() {
        bail!("{owner}: fromOrigin.name must not be empty");
    }
    Ok(())
}
