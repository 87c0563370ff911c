//! Workspace configuration, loaded from TOML.

pub mod explore_config;

pub use explore_config::ExploreConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_LOG_FILTER;
use crate::errors::ConfigError;

/// Top-level Wayfind configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WayfindConfig {
    /// Tracing filter override. Default: `wayfind=info`.
    pub log_filter: Option<String>,
    /// Path exploration limits.
    #[serde(default)]
    pub explore: ExploreConfig,
}

impl WayfindConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Effective tracing filter, defaulting to `wayfind=info`.
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_depth) = self.explore.max_depth {
            if max_depth == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "explore.max_depth".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(max_paths) = self.explore.max_paths {
            if max_paths == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "explore.max_paths".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        Ok(())
    }
}
