//! Error types for grid, dictionary, and solver operations

use std::fmt;
use std::path::PathBuf;

use crate::puzzle::cell::Direction;

/// Main error type for all autofill operations
#[derive(Debug)]
pub enum FillError {
    /// Grid input failed structural validation
    InvalidGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Pattern string failed validation
    ///
    /// Patterns must be non-empty and contain only letters and `'?'`.
    InvalidPattern {
        /// The offending pattern string
        pattern: String,
        /// Explanation of why the pattern is invalid
        reason: &'static str,
    },

    /// A slot violated an extraction invariant
    ///
    /// Indicates a bug in slot extraction rather than bad input; extraction
    /// guarantees every slot spans at least two cells.
    SlotInvariant {
        /// Direction of the offending slot
        direction: Direction,
        /// Crossword number of the offending slot
        number: u32,
        /// Description of the violated invariant
        reason: &'static str,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{pattern}': {reason}")
            }
            Self::SlotInvariant {
                direction,
                number,
                reason,
            } => {
                write!(
                    f,
                    "Slot {number} {direction} violated an invariant: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for autofill results
pub type Result<T> = std::result::Result<T, FillError>;

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> FillError {
    FillError::InvalidGrid {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error tied to a specific path and operation
pub fn file_error(
    path: &std::path::Path,
    operation: &'static str,
    source: std::io::Error,
) -> FillError {
    FillError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
