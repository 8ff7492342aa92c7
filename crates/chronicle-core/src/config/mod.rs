pub mod observability_config;
pub mod registry_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ChronicleError, ChronicleResult};

pub use observability_config::ObservabilityConfig;
pub use registry_config::RegistryConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChronicleConfig {
    pub registry: RegistryConfig,
    pub observability: ObservabilityConfig,
}

impl ChronicleConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> ChronicleResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ChronicleError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw).map_err(|e| {
            ChronicleError::ConfigError(format!("failed to parse {}: {e}", path.display()))
        })
    }
}
