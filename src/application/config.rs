//! Catalog configuration

use crate::domain::value_objects::EmailPolicy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy knobs applied when records enter the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Rule used to accept email addresses
    pub email_policy: EmailPolicy,
    /// Reject item ids below 100
    pub enforce_item_id_minimum: bool,
}

impl CatalogConfig {
    /// Configuration with the strict email grammar and the item id minimum on
    pub fn strict() -> Self {
        Self {
            email_policy: EmailPolicy::Strict,
            enforce_item_id_minimum: true,
        }
    }

    /// Parse configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str(json).context("invalid catalog configuration")?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json(&json)
    }
}
