//! Plain-text puzzle grid loading
//!
//! One row per line. `'#'` marks a blocked cell, `'.'` or a space an empty
//! cell, and a letter a prefilled cell. Blank lines are ignored, so trailing
//! newlines are harmless.

use std::fs;
use std::path::Path;

use crate::io::error::{Result, file_error};
use crate::puzzle::cell::Cell;
use crate::puzzle::grid::Grid;

/// Parse puzzle text into a validated grid
///
/// # Errors
///
/// Returns [`crate::FillError::InvalidGrid`] if the text contains no rows or
/// the rows have unequal length.
pub fn parse_puzzle_text(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(Cell::from_char).collect())
        .collect();
    Grid::from_cell_rows(rows)
}

/// Load and parse a puzzle file
///
/// # Errors
///
/// Returns [`crate::FillError::FileSystem`] if the file cannot be read and
/// [`crate::FillError::InvalidGrid`] if its contents fail validation.
pub fn load_puzzle(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|e| file_error(path, "read puzzle", e))?;
    parse_puzzle_text(&text)
}
