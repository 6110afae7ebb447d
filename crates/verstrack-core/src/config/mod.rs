//! Configuration, loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
mod observability_config;
mod query_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use query_config::{GroupingMode, QueryConfig};
pub use storage_config::StorageConfig;

use crate::errors::{ConfigError, VerstrackResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerstrackConfig {
    pub storage: StorageConfig,
    pub query: QueryConfig,
    pub observability: ObservabilityConfig,
}

impl VerstrackConfig {
    /// Parse from a TOML string. Missing keys take their defaults.
    pub fn from_toml(raw: &str) -> VerstrackResult<Self> {
        Self::parse(raw, "<inline>")
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> VerstrackResult<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display }.into());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&raw, &display)
    }

    fn parse(raw: &str, path: &str) -> VerstrackResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.max_limit".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.query.datetime_field.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "query.datetime_field".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
