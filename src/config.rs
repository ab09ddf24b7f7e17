//! Configuration management for route53-ddns.

use crate::error::{DdnsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Main configuration structure.
///
/// All three fields are required; no defaults are applied. Unknown keys in
/// the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// AWS region used for credential and endpoint resolution.
    pub aws_region: String,

    /// Fully-qualified DNS record name (e.g., "home.example.com").
    pub record: String,

    /// Route 53 hosted zone identifier.
    pub hosted_zone_id: String,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DdnsError::Config(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
