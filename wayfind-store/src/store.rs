//! The mutable graph store.

use tracing::debug;
use wayfind_core::errors::ValidationError;
use wayfind_core::types::{Edge, LabelInterner, Node, NodeId, Path};
use wayfind_engine::{find_optimal_path_with, path_cost, ExploreOptions};

use crate::endpoints::EndpointPolicy;

/// Mutable collection of nodes and edges with an inline-recomputed optimal
/// path between two designated endpoints.
///
/// Invariants: no two nodes share an id, no two edges share a `(from, to)`
/// pair, and every edge endpoint resolves to a stored node. Every mutator
/// recomputes the cached path before returning.
pub struct GraphStore {
    interner: LabelInterner,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    endpoints: EndpointPolicy,
    options: ExploreOptions,
    optimal_path: Path,
    last_error: Option<ValidationError>,
}

impl GraphStore {
    /// Create an empty store with default endpoints (first to last
    /// inserted) and unbounded exploration.
    pub fn new() -> Self {
        Self::with_options(ExploreOptions::default())
    }

    /// Create an empty store with explicit exploration limits.
    pub fn with_options(options: ExploreOptions) -> Self {
        Self {
            interner: LabelInterner::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            endpoints: EndpointPolicy::default(),
            options,
            optimal_path: Path::empty(),
            last_error: None,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The optimal path as of the last mutation. Empty when no route
    /// exists or fewer than two nodes are stored.
    pub fn optimal_path(&self) -> &Path {
        &self.optimal_path
    }

    /// The most recent validation failure, until the next successful
    /// `add_*` call clears it.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Current endpoint policy.
    pub fn endpoints(&self) -> EndpointPolicy {
        self.endpoints
    }

    /// Resolve a stored node's id back to its label.
    pub fn resolve(&self, id: NodeId) -> Option<&str> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.label.as_str())
    }

    /// Look up a stored node by label.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        let id = self.interner.get(label)?;
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Total cost along the cached optimal path, using the same
    /// `(from, to)` edge lookup as the engine. Paths of length 0 or 1
    /// cost 0.
    pub fn total_cost(&self) -> f64 {
        if self.optimal_path.len() <= 1 {
            return 0.0;
        }
        path_cost(&self.optimal_path, &self.edges)
    }

    /// Add a node. Fails if `name` is blank or already taken; a failed
    /// call does not mutate the store.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId, ValidationError> {
        if name.trim().is_empty() {
            return Err(self.fail(ValidationError::BlankName));
        }
        if self.node_by_label(name).is_some() {
            return Err(self.fail(ValidationError::DuplicateNode {
                label: name.to_string(),
            }));
        }

        let id = self.interner.intern(name);
        self.nodes.push(Node::new(id, name));
        self.last_error = None;
        debug!(label = name, "node added");
        self.recompute();
        Ok(id)
    }

    /// Add a directed edge between two existing nodes. Fails on blank
    /// names, negative cost, unknown endpoints, self-loops, and duplicate
    /// `(from, to)` pairs; a failed call does not mutate the edge
    /// collection.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> Result<(), ValidationError> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(self.fail(ValidationError::BlankName));
        }
        if cost < 0.0 {
            return Err(self.fail(ValidationError::NegativeCost { cost }));
        }

        let Some(from_id) = self.node_id_of(from) else {
            return Err(self.fail(ValidationError::UnknownNode {
                label: from.to_string(),
            }));
        };
        let Some(to_id) = self.node_id_of(to) else {
            return Err(self.fail(ValidationError::UnknownNode {
                label: to.to_string(),
            }));
        };

        if from_id == to_id {
            return Err(self.fail(ValidationError::SelfLoop {
                label: from.to_string(),
            }));
        }
        if self
            .edges
            .iter()
            .any(|edge| edge.from == from_id && edge.to == to_id)
        {
            return Err(self.fail(ValidationError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            }));
        }

        self.edges.push(Edge::new(from_id, to_id, cost));
        self.last_error = None;
        debug!(from, to, cost, "edge added");
        self.recompute();
        Ok(())
    }

    /// Remove a node and every edge touching it. Returns whether a node
    /// was removed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.id == id) else {
            return false;
        };
        let node = self.nodes.remove(index);
        let edges_before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        debug!(
            label = %node.label,
            cascaded = edges_before - self.edges.len(),
            "node removed"
        );
        self.recompute();
        true
    }

    /// Remove the edge with the exact `(from, to)` pair. Returns whether
    /// an edge was removed.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let before = self.edges.len();
        self.edges
            .retain(|edge| !(edge.from == from && edge.to == to));
        if self.edges.len() == before {
            return false;
        }
        self.recompute();
        true
    }

    /// Pin explicit start/target endpoints for recomputation. Both labels
    /// must resolve to stored nodes; pinning the same label twice is
    /// allowed (the optimal path is then that single node). If a pinned
    /// node is later removed, recomputation yields the empty path until
    /// the policy changes.
    pub fn pin_endpoints(&mut self, start: &str, target: &str) -> Result<(), ValidationError> {
        let Some(start_id) = self.node_id_of(start) else {
            return Err(self.fail(ValidationError::UnknownNode {
                label: start.to_string(),
            }));
        };
        let Some(target_id) = self.node_id_of(target) else {
            return Err(self.fail(ValidationError::UnknownNode {
                label: target.to_string(),
            }));
        };

        self.endpoints = EndpointPolicy::Pinned {
            start: start_id,
            target: target_id,
        };
        self.last_error = None;
        self.recompute();
        Ok(())
    }

    /// Return to the default first-to-last endpoint policy.
    pub fn unpin_endpoints(&mut self) {
        self.endpoints = EndpointPolicy::FirstToLast;
        self.recompute();
    }

    /// Empty the node, edge, and cached-path collections and the error
    /// field. Endpoint pins are reset to the default policy.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.optimal_path = Path::empty();
        self.last_error = None;
        self.endpoints = EndpointPolicy::FirstToLast;
        self.interner = LabelInterner::new();
    }

    fn node_id_of(&self, label: &str) -> Option<NodeId> {
        self.node_by_label(label).map(|node| node.id)
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    fn fail(&mut self, error: ValidationError) -> ValidationError {
        self.last_error = Some(error.clone());
        error
    }

    /// Recompute the cached optimal path. Called inline by every mutator;
    /// with fewer than two nodes the cached path is cleared.
    fn recompute(&mut self) {
        if self.nodes.len() < 2 {
            self.optimal_path = Path::empty();
            return;
        }

        let (start, target) = match self.endpoints {
            EndpointPolicy::FirstToLast => (
                self.nodes[0].id,
                self.nodes[self.nodes.len() - 1].id,
            ),
            EndpointPolicy::Pinned { start, target } => {
                // A pinned node may have been removed since pinning; the
                // cached path must never reference an unstored node.
                if !self.has_node(start) || !self.has_node(target) {
                    self.optimal_path = Path::empty();
                    return;
                }
                (start, target)
            }
        };

        self.optimal_path = find_optimal_path_with(start, target, &self.edges, self.options);
        debug!(nodes = self.optimal_path.len(), "optimal path recomputed");
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
