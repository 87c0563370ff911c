//! Exploration limits.

use serde::{Deserialize, Serialize};
use wayfind_core::config::ExploreConfig;

/// Limits applied during path enumeration.
///
/// Defaults are unbounded; enumeration terminates on the finite node set
/// and the per-branch no-revisit rule alone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExploreOptions {
    /// Maximum number of edges in an enumerated path.
    pub max_depth: Option<u32>,
    /// Stop after this many paths have been enumerated.
    pub max_paths: Option<usize>,
}

impl From<&ExploreConfig> for ExploreOptions {
    fn from(config: &ExploreConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_paths: config.max_paths,
        }
    }
}
