//! Operator configuration for the application update step.
//!
//! The document names the applications to update, which of their sources are
//! actively managed, and which freight origin each should take revisions
//! from. Origins cascade: source, then app, then step.

use crate::application::Application;
use crate::freight::{FreightCollection, FreightOrigin};
use crate::revisions::desired_revisions;
use crate::update::schema::validate_update_config;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Step-level configuration covering one or more applications.
pub struct UpdateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_origin: Option<FreightOrigin>,
    #[serde(default)]
    pub apps: Vec<AppUpdate>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Update settings for a single application.
pub struct AppUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Default origin for every source of this app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_origin: Option<FreightOrigin>,
    #[serde(default)]
    pub sources: Vec<SourceUpdate>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Declaration that one application source is managed by the step.
pub struct SourceUpdate {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    #[serde(default)]
    pub chart: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_origin: Option<FreightOrigin>,
}

impl UpdateConfig {
    /// Read, schema-check and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        Self::from_value(value).with_context(|| format!("loading {}", path.display()))
    }

    /// Schema-check and parse an already decoded document.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_update_config(&value)?;
        serde_json::from_value(value).context("decoding update config")
    }

    /// The app at `index` with the step-level origin folded into its default.
    pub fn app(&self, index: usize) -> Option<Cow<'_, AppUpdate>> {
        self.apps
            .get(index)
            .map(|app| app.inherit_origin(self.from_origin.as_ref()))
    }

    /// Resolve desired revisions for the app at `index`.
    pub fn desired_revisions(
        &self,
        index: usize,
        application: Option<&Application>,
        freight: &FreightCollection,
    ) -> Result<Vec<String>> {
        let app = self.app(index).ok_or_else(|| {
            anyhow!(
                "app index {index} out of range; config declares {} app(s)",
                self.apps.len()
            )
        })?;
        desired_revisions(application, &app, freight)
            .with_context(|| format!("resolving revisions for app '{}'", app.name))
    }
}

impl AppUpdate {
    /// Use `fallback` as this app's default origin when it sets none.
    pub fn inherit_origin(&self, fallback: Option<&FreightOrigin>) -> Cow<'_, AppUpdate> {
        match (&self.from_origin, fallback) {
            (None, Some(origin)) => Cow::Owned(AppUpdate {
                from_origin: Some(origin.clone()),
                ..self.clone()
            }),
            _ => Cow::Borrowed(self),
        }
    }

    /// Whether this entry targets `application`.
    ///
    /// Namespaces are only compared when both sides carry one.
    pub fn targets(&self, application: &Application) -> bool {
        if self.name != application.name {
            return false;
        }
        match (&self.namespace, &application.namespace) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        }
    }
}
