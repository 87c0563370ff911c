//! Exhaustive simple-path enumeration.
//!
//! Depth-first search over the raw edge list with an explicit frame stack,
//! so pathological graphs cannot overflow the call stack. Outgoing edges
//! are considered exactly in edge-list order; callers that depend on the
//! first-enumerated tie-break (see `optimal`) get recursive-DFS order.

use tracing::trace;
use wayfind_core::types::collections::SmallVec4;
use wayfind_core::types::{Edge, FxHashSet, NodeId, Path};

use super::options::ExploreOptions;

/// One DFS branch: the current node, the path prefix that led here, and
/// the nodes already visited on this branch.
struct Frame {
    node: NodeId,
    path: Path,
    visited: FxHashSet<NodeId>,
}

/// Enumerate every simple (cycle-free) path from `start` to `target`.
///
/// A node already present in the current branch's prefix is never
/// revisited; distinct branches may each visit a node once. A branch
/// terminates the instant it reaches `target`, so `start == target` yields
/// exactly the single-node path. An empty edge list is legal and yields no
/// paths unless `start == target`. Endpoints absent from the edge list are
/// not an error either; they simply produce no paths.
pub fn find_all_simple_paths(start: NodeId, target: NodeId, edges: &[Edge]) -> Vec<Path> {
    find_all_simple_paths_with(start, target, edges, ExploreOptions::default())
}

/// [`find_all_simple_paths`] with depth and path-count limits.
pub fn find_all_simple_paths_with(
    start: NodeId,
    target: NodeId,
    edges: &[Edge],
    options: ExploreOptions,
) -> Vec<Path> {
    let mut paths = Vec::new();
    let mut stack = Vec::new();

    let mut visited = FxHashSet::default();
    visited.insert(start);
    stack.push(Frame {
        node: start,
        path: Path::single(start),
        visited,
    });

    while let Some(frame) = stack.pop() {
        if frame.node == target {
            paths.push(frame.path);
            if let Some(max) = options.max_paths {
                if paths.len() >= max {
                    break;
                }
            }
            continue;
        }

        if let Some(max) = options.max_depth {
            // Depth counts edges: a prefix of N nodes has walked N-1 edges,
            // and expanding adds one more.
            if frame.path.len() as u32 > max {
                continue;
            }
        }

        // Children go on the stack in reverse so they pop in edge-list
        // order, reproducing recursive DFS enumeration.
        let outgoing: SmallVec4<&Edge> = edges
            .iter()
            .filter(|edge| edge.from == frame.node && !frame.visited.contains(&edge.to))
            .collect();
        for edge in outgoing.into_iter().rev() {
            let mut path = frame.path.clone();
            path.push(edge.to);
            let mut visited = frame.visited.clone();
            visited.insert(edge.to);
            stack.push(Frame {
                node: edge.to,
                path,
                visited,
            });
        }
    }

    trace!(count = paths.len(), "simple-path enumeration complete");
    paths
}

#[cfg(test)]
mod tests {
    use wayfind_core::types::LabelInterner;

    use super::*;

    fn intern(labels: &[&str]) -> (LabelInterner, Vec<NodeId>) {
        let mut interner = LabelInterner::new();
        let ids = labels.iter().map(|label| interner.intern(label)).collect();
        (interner, ids)
    }

    #[test]
    fn same_start_and_target_yields_single_node_path() {
        let (_interner, ids) = intern(&["A", "B"]);
        let edges = vec![Edge::new(ids[0], ids[1], 1.0)];

        let paths = find_all_simple_paths(ids[0], ids[0], &edges);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0], Path::single(ids[0]));
    }

    #[test]
    fn empty_edge_list_yields_no_paths() {
        let (_interner, ids) = intern(&["A", "B"]);

        assert!(find_all_simple_paths(ids[0], ids[1], &[]).is_empty());
    }

    #[test]
    fn branches_enumerate_in_edge_list_order() {
        let (_interner, ids) = intern(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        let edges = vec![
            Edge::new(a, b, 1.0),
            Edge::new(b, d, 1.5),
            Edge::new(a, c, 2.0),
            Edge::new(c, d, 0.5),
        ];

        let paths = find_all_simple_paths(a, d, &edges);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), &[a, b, d]);
        assert_eq!(paths[1].nodes(), &[a, c, d]);
    }

    #[test]
    fn cycles_are_not_revisited_within_a_branch() {
        let (_interner, ids) = intern(&["A", "B", "C"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        // A -> B -> A is a cycle; B -> C still reaches the target.
        let edges = vec![
            Edge::new(a, b, 1.0),
            Edge::new(b, a, 1.0),
            Edge::new(b, c, 1.0),
        ];

        let paths = find_all_simple_paths(a, c, &edges);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[a, b, c]);
    }

    #[test]
    fn distinct_branches_may_share_intermediate_nodes() {
        let (_interner, ids) = intern(&["A", "B", "C", "D", "E"]);
        let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);
        // Two routes into D, one route out: both paths traverse D.
        let edges = vec![
            Edge::new(a, b, 1.0),
            Edge::new(a, c, 1.0),
            Edge::new(b, d, 1.0),
            Edge::new(c, d, 1.0),
            Edge::new(d, e, 1.0),
        ];

        let paths = find_all_simple_paths(a, e, &edges);

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|path| path.contains(d)));
    }

    #[test]
    fn target_frames_are_never_expanded() {
        let (_interner, ids) = intern(&["A", "B", "C"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        // B is the target and also has an outgoing edge; no path may pass
        // through it.
        let edges = vec![
            Edge::new(a, b, 1.0),
            Edge::new(b, c, 1.0),
            Edge::new(c, b, 1.0),
            Edge::new(a, c, 1.0),
        ];

        let paths = find_all_simple_paths(a, b, &edges);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), &[a, b]);
        assert_eq!(paths[1].nodes(), &[a, c, b]);
    }

    #[test]
    fn max_depth_prunes_long_branches() {
        let (_interner, ids) = intern(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        let edges = vec![
            Edge::new(a, d, 5.0),
            Edge::new(a, b, 1.0),
            Edge::new(b, c, 1.0),
            Edge::new(c, d, 1.0),
        ];

        let capped = find_all_simple_paths_with(
            a,
            d,
            &edges,
            ExploreOptions {
                max_depth: Some(1),
                max_paths: None,
            },
        );

        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].nodes(), &[a, d]);
    }

    #[test]
    fn max_paths_stops_enumeration_early() {
        let (_interner, ids) = intern(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        let edges = vec![
            Edge::new(a, b, 1.0),
            Edge::new(b, d, 1.0),
            Edge::new(a, c, 1.0),
            Edge::new(c, d, 1.0),
        ];

        let capped = find_all_simple_paths_with(
            a,
            d,
            &edges,
            ExploreOptions {
                max_depth: None,
                max_paths: Some(1),
            },
        );

        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].nodes(), &[a, b, d]);
    }
}
