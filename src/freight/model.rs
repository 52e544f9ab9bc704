//! Deserializable representation of freight references.
//!
//! Field names follow the controller's API objects (`repoURL`, `id`, ...) so a
//! freight selection dumped as JSON can be fed straight into the resolver.

use crate::freight::identity::FreightOrigin;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Chart artifact carried by a freight reference.
///
/// `name` is empty for classic HTTPS chart repositories where the chart is
/// addressed by the declared source, and for OCI references that already
/// fold the chart name into `repo_url`.
pub struct Chart {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    #[serde(default)]
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Git commit artifact carried by a freight reference.
pub struct GitCommit {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    pub id: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Artifacts produced together by one origin.
pub struct FreightReference {
    pub origin: FreightOrigin,
    #[serde(default)]
    pub charts: Vec<Chart>,
    #[serde(default)]
    pub commits: Vec<GitCommit>,
}

impl Chart {
    pub fn new(repo_url: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl GitCommit {
    pub fn new(repo_url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            id: id.into(),
        }
    }
}
