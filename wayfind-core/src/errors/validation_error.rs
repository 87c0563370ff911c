//! Graph mutation validation errors.

/// Recoverable failures from `GraphStore` mutation attempts.
///
/// `Clone + PartialEq` so the store can keep the last failure in a field
/// and tests can assert exact variants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("node name must not be blank")]
    BlankName,

    #[error("node '{label}' already exists")]
    DuplicateNode { label: String },

    #[error("edge from '{from}' to '{to}' already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("node '{label}' does not exist")]
    UnknownNode { label: String },

    #[error("edge cost must not be negative (got {cost})")]
    NegativeCost { cost: f64 },

    #[error("self-loop edges are not allowed ('{label}')")]
    SelfLoop { label: String },
}
