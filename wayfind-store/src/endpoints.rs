//! Endpoint selection for optimal-path recomputation.

use wayfind_core::types::NodeId;

/// How the store picks start/target when recomputing the optimal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// First and last node in insertion order. The default.
    FirstToLast,
    /// Caller-pinned endpoints.
    Pinned { start: NodeId, target: NodeId },
}

impl Default for EndpointPolicy {
    fn default() -> Self {
        Self::FirstToLast
    }
}
