//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for path node sequences (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec optimized for outgoing-edge scratch lists (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
