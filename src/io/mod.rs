//! Input/output operations and error handling

/// Command-line interface and solve orchestration
pub mod cli;
/// Solver constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Plain-text puzzle loading
pub mod input;
/// Iteration progress display
pub mod progress;
/// Word list file loading
pub mod wordlist;
