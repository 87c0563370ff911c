//! Directed weighted edge, unique by its ordered endpoint pair.

use serde::{Deserialize, Serialize};

use super::identifiers::NodeId;

/// A directed connection between two nodes.
///
/// Identity is the ordered `(from, to)` pair only. Cost is not part of it,
/// so two edges between the same pair are duplicates even when their costs
/// differ. An edge A to B does not imply B to A.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Traversal cost. Validated non-negative at the store boundary.
    pub cost: f64,
}

impl Edge {
    /// Create an edge.
    pub fn new(from: NodeId, to: NodeId, cost: f64) -> Self {
        Self { from, to, cost }
    }

    /// The ordered endpoint pair that defines this edge's identity.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    /// True if `node` is either endpoint.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}
