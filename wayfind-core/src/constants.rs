//! Workspace-wide constants.

/// Cost of a path with a missing edge.
///
/// Compares greater than any finite path cost, so optimum selection
/// discards disconnected paths without special-casing. Never returned for
/// a connected path: edge costs are validated non-negative at the store
/// boundary and cannot sum to infinity on the small graphs this engine
/// targets.
pub const DISCONNECTED_COST: f64 = f64::INFINITY;

/// Default tracing filter when `WAYFIND_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "wayfind=info";
