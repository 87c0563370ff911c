//! Minimum-cost path selection.

use tracing::debug;
use wayfind_core::types::{Edge, NodeId, Path};

use super::cost::path_cost;
use super::dfs::find_all_simple_paths_with;
use super::options::ExploreOptions;

/// Find the minimum-total-cost simple path from `start` to `target`.
///
/// Ties keep the first path in enumeration order (depth-first, edges in
/// list order). No route is a normal outcome: the result is the empty
/// path, never an error.
pub fn find_optimal_path(start: NodeId, target: NodeId, edges: &[Edge]) -> Path {
    find_optimal_path_with(start, target, edges, ExploreOptions::default())
}

/// [`find_optimal_path`] with exploration limits.
pub fn find_optimal_path_with(
    start: NodeId,
    target: NodeId,
    edges: &[Edge],
    options: ExploreOptions,
) -> Path {
    let candidates = find_all_simple_paths_with(start, target, edges, options);

    let mut best: Option<(Path, f64)> = None;
    for path in candidates {
        let cost = path_cost(&path, edges);
        // Strict comparison keeps the earliest-enumerated path on ties.
        let better = match &best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if better {
            best = Some((path, cost));
        }
    }

    match best {
        Some((path, cost)) => {
            debug!(nodes = path.len(), cost, "optimal path selected");
            path
        }
        None => {
            debug!("no route between endpoints");
            Path::empty()
        }
    }
}
