//! Path scoring.

use wayfind_core::constants::DISCONNECTED_COST;
use wayfind_core::types::{Edge, NodeId, Path};

/// Look up the unique edge with the exact ordered `(from, to)` pair.
pub fn edge_between(edges: &[Edge], from: NodeId, to: NodeId) -> Option<&Edge> {
    edges.iter().find(|edge| edge.from == from && edge.to == to)
}

/// Total cost of `path` over `edges`.
///
/// A path of length 0 or 1 costs exactly 0.0 as an explicit special case;
/// no aggregation over zero segments is attempted. For longer paths each
/// consecutive pair must match an edge; a missing edge makes the whole
/// path disconnected and the result is
/// [`DISCONNECTED_COST`](wayfind_core::constants::DISCONNECTED_COST), which
/// any finite alternative beats during optimum selection.
pub fn path_cost(path: &Path, edges: &[Edge]) -> f64 {
    if path.len() <= 1 {
        return 0.0;
    }

    let mut total = 0.0;
    for (from, to) in path.segments() {
        match edge_between(edges, from, to) {
            Some(edge) => total += edge.cost,
            None => return DISCONNECTED_COST,
        }
    }
    total
}
