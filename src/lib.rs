//! Crossword autofill via backtracking search over a length-indexed dictionary
//!
//! The system derives numbered word slots from a grid's blocked-cell layout,
//! indexes a word dictionary by length for pattern queries, and fills the
//! grid by backtracking search, either exhaustively or with a shuffled,
//! uniqueness-enforcing heuristic under iteration and retry budgets.

#![forbid(unsafe_code)]

/// Word dictionary indexing and pattern matching
pub mod dictionary;
/// Input/output operations and error handling
pub mod io;
/// Puzzle data model: cells, grid, and slot derivation
pub mod puzzle;
/// Backtracking fill in exhaustive and heuristic modes
pub mod solver;

pub use io::error::{FillError, Result};
