//! Configuration errors.

use std::path::PathBuf;

/// Errors that can occur while loading Wayfind configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {source}")]
    ParseFailed {
        #[from]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
