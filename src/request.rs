//! Batch request consumed by the `desired-revisions` binary.
//!
//! A request bundles the update config, the freight selection and the live
//! applications; resolving it yields one revision list per configured app.

use crate::application::Application;
use crate::freight::FreightCollection;
use crate::update::UpdateConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
/// Raw request document. `config` stays untyped until it passes the schema.
pub struct ResolutionRequest {
    pub config: Value,
    #[serde(default)]
    pub freight: FreightCollection,
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
/// Revisions resolved for one configured app.
pub struct AppRevisions {
    pub app: String,
    pub revisions: Vec<String>,
}

impl ResolutionRequest {
    pub fn from_slice(input: &[u8]) -> Result<Self> {
        serde_json::from_slice(input).context("failed to parse resolution request")
    }

    /// Resolve every configured app against the first application it targets.
    ///
    /// An app with no live application resolves to an empty list.
    pub fn resolve(&self) -> Result<Vec<AppRevisions>> {
        let config = UpdateConfig::from_value(self.config.clone())?;
        let mut results = Vec::with_capacity(config.apps.len());
        for (idx, app) in config.apps.iter().enumerate() {
            let application = self.applications.iter().find(|live| app.targets(live));
            let revisions = config.desired_revisions(idx, application, &self.freight)?;
            results.push(AppRevisions {
                app: app.name.clone(),
                revisions,
            });
        }
        Ok(results)
    }
}
