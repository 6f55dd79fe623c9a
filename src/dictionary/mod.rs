//! Word dictionary indexing and pattern matching

/// Length-bucketed word index
pub mod index;
/// Fill patterns and word matching
pub mod pattern;

pub use index::{Dictionary, DictionaryStats};
pub use pattern::Pattern;
