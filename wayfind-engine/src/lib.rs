//! Path enumeration and optimal route selection.
//!
//! The engine is pure: it operates on immutable edge-list snapshots and
//! never raises. Failure modes degenerate to empty results or the
//! disconnected-cost sentinel
//! ([`DISCONNECTED_COST`](wayfind_core::constants::DISCONNECTED_COST)).

pub mod explore;
pub mod parse;

pub use explore::{
    edge_between, find_all_simple_paths, find_all_simple_paths_with, find_optimal_path,
    find_optimal_path_with, path_cost, ExploreOptions,
};
pub use parse::parse_edge_costs;
