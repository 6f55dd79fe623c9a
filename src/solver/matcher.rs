//! The word-supply seam between the solver and the dictionary
//!
//! Pattern-match queries are side-effect-free and independently invokable,
//! with no ordering requirement between calls. Colocated deployments answer
//! from the in-process [`Dictionary`]; a distributed deployment can implement
//! the same trait over a network call. The solver never knows the difference.

use crate::dictionary::index::Dictionary;
use crate::dictionary::pattern::Pattern;

/// Supplies candidate words for a fill pattern
pub trait WordSource {
    /// All words fitting `pattern`, in a stable order
    ///
    /// A pattern with no unknowns is its own single-element match.
    fn matching_words(&self, pattern: &Pattern) -> Vec<String>;
}

impl WordSource for Dictionary {
    fn matching_words(&self, pattern: &Pattern) -> Vec<String> {
        Self::matching_words(self, pattern)
    }
}
