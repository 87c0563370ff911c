//! Core types, errors, config, tracing, and constants for the Wayfind
//! route engine.
//!
//! Everything here is shared by the engine and store crates: the interned
//! node identity scheme, the edge/path data model, the error taxonomy, and
//! the ambient plumbing (TOML config, tracing setup).

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
