//! Backtracking fill: slot selection, candidate retrieval, placement, undo

/// Exhaustive depth-first fill mode
pub mod exhaustive;
/// Heuristic fill mode with uniqueness and bounded retries
pub mod heuristic;
/// Word-supply trait consumed by the solver
pub mod matcher;
/// Placement and conflict-check primitives
pub mod placement;
/// Per-run state and the solve result contract
pub mod state;
/// Post-solve grid verification
pub mod verify;

pub use matcher::WordSource;
pub use state::{SolveReport, SolverConfig};
pub use verify::{FillCheck, verify_fill};
