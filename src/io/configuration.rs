//! Solver constants and runtime configuration defaults

/// Number of failed re-entries a slot tolerates before the solver abandons
/// the current branch entirely
pub const STUCK_THRESHOLD: usize = 20;

/// Default maximum solver iterations before giving up
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Fixed seed for reproducible heuristic solves
pub const DEFAULT_SEED: u64 = 42;

// Puzzle text format characters
/// Marks a blocked cell in puzzle files and rendered grids
pub const BLOCKED_CHAR: char = '#';
/// Marks an empty cell in puzzle files
pub const EMPTY_CHAR: char = '.';
/// Marks an unknown letter in slot patterns
pub const UNKNOWN_CHAR: char = '?';
/// Placeholder for an empty cell in rendered output
pub const RENDER_EMPTY_CHAR: char = '_';

// Progress display settings
/// Iterations between progress bar updates
pub const PROGRESS_TICK_INTERVAL: usize = 64;
