//! Simple-path exploration over directed weighted edge lists.
//!
//! Three layers:
//! - **dfs**: exhaustive cycle-free enumeration in edge-list order
//! - **cost**: path scoring with the disconnected sentinel
//! - **optimal**: minimum-cost selection with enumeration-order tie-break

pub mod cost;
pub mod dfs;
pub mod optimal;
pub mod options;

pub use cost::{edge_between, path_cost};
pub use dfs::{find_all_simple_paths, find_all_simple_paths_with};
pub use optimal::{find_optimal_path, find_optimal_path_with};
pub use options::ExploreOptions;
