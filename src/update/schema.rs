//! JSON Schema check for update configuration documents.
//!
//! The schema ships inside the binary so a config can be validated without a
//! repository checkout. Every violation is reported, not just the first.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const UPDATE_CONFIG_SCHEMA: &str = include_str!("../../schema/update_config.schema.json");

/// Validate a decoded config document against the embedded schema.
pub fn validate_update_config(config: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(UPDATE_CONFIG_SCHEMA).context("parsing update config schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling update config schema: {err}"))?;

    if let Err(errors) = compiled.validate(config) {
        let details = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        bail!("update config failed schema validation:\n{details}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_config() {
        validate_update_config(&json!({"apps": [{"name": "guestbook"}]})).unwrap();
    }

    #[test]
    fn reports_every_violation() {
        let err = validate_update_config(&json!({
            "apps": [{
                "name": "",
                "sources": [{"chart": "fake-chart"}]
            }]
        }))
        .expect_err("two violations expected");
        let message = err.to_string();
        assert!(message.contains("/apps/0/name"), "{message}");
        assert!(message.contains("repoURL"), "{message}");
    }

    #[test]
    fn rejects_origin_without_name() {
        let err = validate_update_config(&json!({
            "fromOrigin": {"kind": "Warehouse"},
            "apps": [{"name": "guestbook"}]
        }))
        .expect_err("origin name is required");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_empty_app_list() {
        assert!(validate_update_config(&json!({"apps": []})).is_err());
    }
}
