//! Graph node: interned identity plus display label.

use serde::{Deserialize, Serialize};

use super::identifiers::NodeId;

/// A labeled vertex in the graph.
///
/// Equality and hashing are by `id` only. Nodes are immutable once
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Interned identity.
    pub id: NodeId,
    /// Display label the id was minted from.
    pub label: String,
}

impl Node {
    /// Create a node from an interned id and its label.
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
