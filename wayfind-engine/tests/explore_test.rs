//! End-to-end tests for the path engine over small illustrative graphs.

use wayfind_core::constants::DISCONNECTED_COST;
use wayfind_core::types::{Edge, LabelInterner, NodeId, Path};
use wayfind_engine::{
    find_all_simple_paths, find_all_simple_paths_with, find_optimal_path, parse_edge_costs,
    path_cost, ExploreOptions,
};

fn intern(labels: &[&str]) -> (LabelInterner, Vec<NodeId>) {
    let mut interner = LabelInterner::new();
    let ids = labels.iter().map(|label| interner.intern(label)).collect();
    (interner, ids)
}

/// The diamond graph where both routes tie at cost 2.5: the engine must
/// return the route whose first edge appears earlier in the edge list.
#[test]
fn tied_routes_resolve_by_edge_list_order() {
    let (_interner, ids) = intern(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let edges = vec![
        Edge::new(a, b, 1.0),
        Edge::new(b, d, 1.5),
        Edge::new(a, c, 2.0),
        Edge::new(c, d, 0.5),
    ];

    let path = find_optimal_path(a, d, &edges);

    assert_eq!(path.nodes(), &[a, b, d]);
    assert_eq!(path_cost(&path, &edges), 2.5);

    // Reordering the edge list flips the winner without changing the cost.
    let reordered = vec![
        Edge::new(a, c, 2.0),
        Edge::new(c, d, 0.5),
        Edge::new(a, b, 1.0),
        Edge::new(b, d, 1.5),
    ];
    let flipped = find_optimal_path(a, d, &reordered);
    assert_eq!(flipped.nodes(), &[a, c, d]);
    assert_eq!(path_cost(&flipped, &reordered), 2.5);
}

/// A strictly cheaper route wins regardless of enumeration order.
#[test]
fn cheaper_route_beats_earlier_enumeration() {
    let (_interner, ids) = intern(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let edges = vec![
        Edge::new(a, b, 1.0),
        Edge::new(a, c, 2.0),
        Edge::new(b, d, 3.0),
        Edge::new(c, d, 1.0),
    ];

    let path = find_optimal_path(a, d, &edges);

    assert_eq!(path.nodes(), &[a, c, d]);
    assert_eq!(path_cost(&path, &edges), 3.0);
}

#[test]
fn identity_holds_for_any_edge_set() {
    let (_interner, ids) = intern(&["A", "B"]);
    let (a, b) = (ids[0], ids[1]);

    for edges in [vec![], vec![Edge::new(a, b, 1.0), Edge::new(b, a, 2.0)]] {
        let path = find_optimal_path(a, a, &edges);
        assert_eq!(path, Path::single(a));
        assert_eq!(path_cost(&path, &edges), 0.0);
    }
}

#[test]
fn disconnection_is_an_empty_path_not_an_error() {
    let (_interner, ids) = intern(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    // Two islands: {A, B} and {C, D}.
    let edges = vec![Edge::new(a, b, 1.0), Edge::new(c, d, 1.0)];

    let path = find_optimal_path(a, d, &edges);

    assert!(path.is_empty());
    assert_eq!(path_cost(&path, &edges), 0.0);
}

/// Endpoints that never appear in the edge list are ordinary inputs.
#[test]
fn unknown_endpoints_yield_no_paths() {
    let (_interner, ids) = intern(&["A", "B", "X", "Y"]);
    let (a, b, x, y) = (ids[0], ids[1], ids[2], ids[3]);
    let edges = vec![Edge::new(a, b, 1.0)];

    assert!(find_all_simple_paths(x, y, &edges).is_empty());
    assert!(find_optimal_path(x, b, &edges).is_empty());
    assert!(find_optimal_path(a, y, &edges).is_empty());
}

/// A hand-built node sequence that skips an edge scores as disconnected
/// and loses to any connected alternative.
#[test]
fn disconnected_candidate_never_beats_a_connected_one() {
    let (_interner, ids) = intern(&["A", "B", "C"]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let edges = vec![Edge::new(a, b, 10.0), Edge::new(b, c, 10.0)];

    let connected = Path::from(vec![a, b, c]);
    let skipping = Path::from(vec![a, c]);

    assert_eq!(path_cost(&connected, &edges), 20.0);
    assert_eq!(path_cost(&skipping, &edges), DISCONNECTED_COST);
    assert!(path_cost(&skipping, &edges) > path_cost(&connected, &edges));
}

/// Repeated queries over an unchanged edge set return the identical node
/// sequence.
#[test]
fn optimal_path_is_idempotent() {
    let (_interner, ids) = intern(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let edges = vec![
        Edge::new(a, b, 1.0),
        Edge::new(b, d, 1.5),
        Edge::new(a, c, 2.0),
        Edge::new(c, d, 0.5),
    ];

    let first = find_optimal_path(a, d, &edges);
    let second = find_optimal_path(a, d, &edges);

    assert_eq!(first, second);
}

#[test]
fn exploration_limits_bound_the_search() {
    let (_interner, ids) = intern(&["A", "B", "C", "D", "E"]);
    let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);
    let edges = vec![
        Edge::new(a, b, 1.0),
        Edge::new(b, c, 1.0),
        Edge::new(c, d, 1.0),
        Edge::new(d, e, 1.0),
        Edge::new(a, e, 10.0),
    ];

    let unbounded = find_all_simple_paths(a, e, &edges);
    assert_eq!(unbounded.len(), 2);

    let shallow = find_all_simple_paths_with(
        a,
        e,
        &edges,
        ExploreOptions {
            max_depth: Some(2),
            max_paths: None,
        },
    );
    assert_eq!(shallow.len(), 1);
    assert_eq!(shallow[0].nodes(), &[a, e]);
}

#[test]
fn cost_strings_filter_to_the_parsed_subset() {
    assert_eq!(parse_edge_costs(["1.5", "invalid", "3.7"]), vec![1.5, 3.7]);
}

#[test]
fn options_inherit_config_limits() {
    let config = wayfind_core::config::ExploreConfig {
        max_depth: Some(3),
        max_paths: Some(10),
    };

    let options = ExploreOptions::from(&config);

    assert_eq!(options.max_depth, Some(3));
    assert_eq!(options.max_paths, Some(10));
}
