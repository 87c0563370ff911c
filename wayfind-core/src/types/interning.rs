//! String interning for node labels.
//!
//! Uses `lasso::Rodeo`: the store is driven by a single logical owner, so
//! the single-threaded interner is sufficient.

use lasso::Rodeo;

use super::identifiers::NodeId;

/// Label interner that mints stable `NodeId`s.
///
/// Interning the same label twice yields the same id, so a re-added node
/// keeps its previous identity.
pub struct LabelInterner {
    inner: Rodeo,
}

impl LabelInterner {
    /// Create a new label interner.
    pub fn new() -> Self {
        Self {
            inner: Rodeo::default(),
        }
    }

    /// Intern a label, minting its `NodeId`.
    pub fn intern(&mut self, label: &str) -> NodeId {
        NodeId::new(self.inner.get_or_intern(label))
    }

    /// Look up a previously interned label without inserting.
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.inner.get(label).map(NodeId::new)
    }

    /// Resolve a `NodeId` back to its label.
    pub fn resolve(&self, id: NodeId) -> &str {
        self.inner.resolve(&id.inner())
    }

    /// Number of distinct labels interned.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if no labels have been interned.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for LabelInterner {
    fn default() -> Self {
        Self::new()
    }
}
