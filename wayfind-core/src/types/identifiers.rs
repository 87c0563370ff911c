//! Spur-based node identity.
//!
//! `NodeId` wraps a `lasso::Spur` minted by a
//! [`LabelInterner`](super::interning::LabelInterner). Identity is the
//! interned label key: deterministic per store, never a string hash that
//! could collide or shift across versions.

use lasso::Spur;
use serde::{Deserialize, Serialize};

/// Interned node label identifier.
///
/// Two nodes are the same node iff their `NodeId`s are equal, regardless of
/// any other field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Spur);

impl NodeId {
    /// Create an ID from a `Spur`.
    pub fn new(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the inner `Spur`.
    pub fn inner(self) -> Spur {
        self.0
    }
}

impl From<Spur> for NodeId {
    fn from(spur: Spur) -> Self {
        Self(spur)
    }
}

impl From<NodeId> for Spur {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
