//! Node sequences produced by path enumeration.

use serde::{Deserialize, Serialize};

use super::collections::SmallVec8;
use super::identifiers::NodeId;

/// An ordered sequence of nodes connected by edges.
///
/// The empty path represents "no route", a normal, representable outcome
/// rather than a fault. A single-node path (start equals target) is valid
/// with cost 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: SmallVec8<NodeId>,
}

impl Path {
    /// The empty path ("no route").
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single-node path.
    pub fn single(node: NodeId) -> Self {
        let mut nodes = SmallVec8::new();
        nodes.push(node);
        Self { nodes }
    }

    /// Number of nodes in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the "no route" path.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in traversal order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Append a node to the end of the path.
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// True if the path already visits `node`.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// First node, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node, if any.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes: SmallVec8::from_vec(nodes),
        }
    }
}

impl FromIterator<NodeId> for Path {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
