//! Read-only slice of the live application object.
//!
//! Only the declared sources are consumed; everything else on the object is
//! owned by the control plane and ignored when deserializing.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Application with just enough of its spec to list declared sources.
pub struct Application {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub spec: ApplicationSpec,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ApplicationSource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ApplicationSource>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// One declared source; an empty `chart` marks a git source.
pub struct ApplicationSource {
    #[serde(default, rename = "repoURL")]
    pub repo_url: String,
    #[serde(default)]
    pub chart: String,
}

impl Application {
    /// Declared sources in spec order.
    ///
    /// Multi-source applications list `sources`; older single-source ones
    /// only set `source`. `sources` wins when both are present.
    pub fn declared_sources(&self) -> &[ApplicationSource] {
        if !self.spec.sources.is_empty() {
            return &self.spec.sources;
        }
        match &self.spec.source {
            Some(source) => std::slice::from_ref(source),
            None => &[],
        }
    }
}

impl ApplicationSource {
    pub fn new(repo_url: impl Into<String>, chart: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            chart: chart.into(),
        }
    }
}
