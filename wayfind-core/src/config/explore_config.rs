//! Path exploration limits.

use serde::{Deserialize, Serialize};

/// Limits for simple-path enumeration.
///
/// Both limits default to unbounded: enumeration always terminates on the
/// finite node set and the no-revisit rule, and the intended graphs are
/// small. The caps exist for callers that feed pathological inputs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExploreConfig {
    /// Maximum number of edges in an enumerated path. Default: unbounded.
    pub max_depth: Option<u32>,
    /// Maximum number of paths to enumerate. Default: unbounded.
    pub max_paths: Option<usize>,
}
