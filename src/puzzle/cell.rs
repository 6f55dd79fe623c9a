//! Cell values and fill directions
//!
//! Raw grid content arrives as arbitrary strings (editor input, parsed
//! puzzle files), so every read goes through normalization: a cell holds at
//! most one uppercase letter, and anything unrecognizable degrades to empty.

use std::fmt;

use crate::io::configuration::{BLOCKED_CHAR, EMPTY_CHAR};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A wall; can never hold a letter
    Blocked,
    /// A fillable cell with no letter yet
    Empty,
    /// A fillable cell holding one uppercase A-Z letter
    Letter(char),
}

impl Cell {
    /// Normalize raw cell content
    ///
    /// `'#'` marks a blocked cell. A single ASCII letter (after trimming)
    /// becomes an uppercase [`Cell::Letter`]. Everything else, including
    /// whitespace and multi-character content, is treated as empty.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Self::Empty,
        }
    }

    /// Normalize a single raw character
    pub fn from_char(c: char) -> Self {
        match c {
            BLOCKED_CHAR => Self::Blocked,
            EMPTY_CHAR => Self::Empty,
            c if c.is_ascii_alphabetic() => Self::Letter(c.to_ascii_uppercase()),
            _ => Self::Empty,
        }
    }

    /// The letter held by this cell, if any
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this cell is a wall
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Whether this cell can hold a letter
    pub const fn is_free(self) -> bool {
        !self.is_blocked()
    }
}

/// Fill direction of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right
    Across,
    /// Top to bottom
    Down,
}

impl Direction {
    /// The perpendicular direction
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}
