//! Fill patterns: the known/unknown state of a slot's letters
//!
//! A pattern is a non-empty string over `{A..Z, '?'}`, always the same length
//! as the slot it was projected from. Projection is total for well-formed
//! slots: any cell that does not hold a single letter reads as `'?'`.

use std::fmt;

use crate::io::configuration::UNKNOWN_CHAR;
use crate::io::error::{FillError, Result};
use crate::puzzle::cell::Cell;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::Slot;

/// A validated fill pattern, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Parse and validate a raw pattern string
    ///
    /// Input is trimmed and uppercased; letters and `'?'` are the only
    /// characters accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::InvalidPattern`] if the trimmed pattern is empty
    /// or contains characters outside `{A-Z, a-z, '?'}`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FillError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern is empty",
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == UNKNOWN_CHAR)
        {
            return Err(FillError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern may contain only letters and '?'",
            });
        }
        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Project a slot's current fill state from a grid snapshot
    ///
    /// Each slot cell reads as its letter when it holds one and as `'?'`
    /// otherwise (empty, blocked, or out of bounds).
    ///
    /// # Errors
    ///
    /// Returns [`FillError::SlotInvariant`] for a zero-length slot, which
    /// extraction can never produce; reaching this indicates an extraction
    /// bug and is fatal to the run.
    pub fn from_grid(grid: &Grid, slot: &Slot) -> Result<Self> {
        if slot.is_empty() {
            return Err(FillError::SlotInvariant {
                direction: slot.id.direction,
                number: slot.id.number,
                reason: "slot has no cells",
            });
        }

        let text = slot
            .cells
            .iter()
            .map(|pos| {
                grid.cell(pos.x, pos.y)
                    .and_then(Cell::letter)
                    .unwrap_or(UNKNOWN_CHAR)
            })
            .collect();
        Ok(Self { text })
    }

    /// The pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Pattern length in characters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the pattern has no characters (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether every position is a known letter
    pub fn is_complete(&self) -> bool {
        !self.text.contains(UNKNOWN_CHAR)
    }

    /// Whether `word` fits this pattern
    ///
    /// True iff the lengths match and every non-`'?'` position agrees with
    /// the word's letter at that position, case-insensitively.
    pub fn matches_word(&self, word: &str) -> bool {
        if word.len() != self.text.len() {
            return false;
        }
        self.text
            .chars()
            .zip(word.chars())
            .all(|(p, w)| p == UNKNOWN_CHAR || p.eq_ignore_ascii_case(&w))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
