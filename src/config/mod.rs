//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cache::INVOICES_PATH;

/// Configuration for the mutation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Connection string for the postgres backend. Absent means the
    /// in-memory store.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Location of the invoices listing view; redirect target and
    /// invalidation key.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
}

fn default_listing_path() -> String {
    INVOICES_PATH.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            listing_path: default_listing_path(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.database_url.is_none());
        assert_eq!(config.listing_path, "/dashboard/invoices");
    }

    #[test]
    fn test_yaml_with_overrides() {
        let config = PipelineConfig::from_yaml_str(
            "database_url: postgres://localhost/billing\nlisting_path: /billing/invoices\n",
        )
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/billing")
        );
        assert_eq!(config.listing_path, "/billing/invoices");
    }

    #[test]
    fn test_yaml_defaults_apply_to_missing_keys() {
        let config = PipelineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.listing_path, "/dashboard/invoices");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = PipelineConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = PipelineConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.listing_path, config.listing_path);
    }
}
