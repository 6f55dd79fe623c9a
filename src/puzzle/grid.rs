//! Rectangular cell matrix with construction-time validation
//!
//! A [`Grid`] is the unit of work for a solve: the solver clones the caller's
//! grid once at the start of a run and again before every tentative placement
//! (the snapshot that backtracking restores). Dimensions are fixed for the
//! grid's lifetime; cells are addressed as `(x, y)` with `x` as the column.

use ndarray::Array2;

use crate::io::error::{Result, invalid_grid};
use crate::puzzle::cell::Cell;

/// Rectangular matrix of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Build a grid from raw string rows
    ///
    /// Each entry is normalized through [`Cell::from_raw`]. This is the
    /// validation gate for external input: structural problems fail here,
    /// before any slot extraction or solving begins.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FillError::InvalidGrid`] if there are zero rows, zero
    /// columns, or rows of unequal length.
    pub fn from_raw_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let cell_rows: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.iter().map(|raw| Cell::from_raw(raw.as_ref())).collect())
            .collect();
        Self::from_cell_rows(cell_rows)
    }

    /// Build a grid from already-normalized cell rows
    ///
    /// # Errors
    ///
    /// Returns [`crate::FillError::InvalidGrid`] if there are zero rows, zero
    /// columns, or rows of unequal length.
    pub fn from_cell_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(invalid_grid(&"grid has no rows"));
        }

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(invalid_grid(&"grid has no columns"));
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid_grid(&format!(
                    "grid is not rectangular: row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| invalid_grid(&format!("grid shape mismatch: {e}")))?;

        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Read the cell at `(x, y)`, or `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get([y, x]).copied()
    }

    /// Write the cell at `(x, y)`
    ///
    /// Out-of-bounds writes are ignored and reported as `false`.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        self.cells.get_mut([y, x]).map(|slot| *slot = cell).is_some()
    }

    /// Whether every free cell holds a letter
    pub fn is_filled(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_blocked() || cell.letter().is_some())
    }

    /// Count of free cells without a letter
    pub fn unfilled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_free() && cell.letter().is_none())
            .count()
    }

    /// Render the grid as one line per row
    ///
    /// Blocked cells print as `'#'`, empty cells as `'_'`, letters as
    /// themselves.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for row in self.cells.rows() {
            for cell in row {
                out.push(match cell {
                    Cell::Blocked => crate::io::configuration::BLOCKED_CHAR,
                    Cell::Empty => crate::io::configuration::RENDER_EMPTY_CHAR,
                    Cell::Letter(c) => *c,
                });
            }
            out.push('\n');
        }
        out
    }
}
