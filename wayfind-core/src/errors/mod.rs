//! Typed errors for Wayfind.
//!
//! `ValidationError` covers recoverable mutation failures surfaced to the
//! caller; `ConfigError` covers configuration loading. The path engine
//! itself never raises: its failure modes degenerate to empty results or
//! the disconnected-cost sentinel.

pub mod config_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use validation_error::ValidationError;
