//! Slot extraction and crossword numbering
//!
//! A slot is a maximal run of free cells in one direction, at least two cells
//! long. Numbering follows the published-crossword convention: cells are
//! scanned in row-major order and one shared counter increments exactly once
//! per cell that starts a slot in either direction, so a cell starting both
//! an across and a down slot contributes a single number used by both.
//!
//! Slots are derived from the blocked-cell layout only; they must be
//! re-extracted whenever that layout changes.

use crate::puzzle::cell::{Cell, Direction};
use crate::puzzle::grid::Grid;

/// One cell position within a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCell {
    /// Column of the cell
    pub x: usize,
    /// Row of the cell
    pub y: usize,
    /// Zero-based letter index within the slot's word
    pub index: usize,
}

/// Clue text and its known answer for one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clue {
    /// Human-readable clue text
    pub text: String,
    /// Known answer, if any
    pub answer: String,
}

impl Clue {
    /// Create a clue from text and answer
    pub const fn new(text: String, answer: String) -> Self {
        Self { text, answer }
    }
}

/// Slot identity: direction plus crossword number
///
/// The same number may identify one across and one down slot (shared
/// numbering), so identity requires both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    /// Fill direction
    pub direction: Direction,
    /// Crossword number assigned during extraction
    pub number: u32,
}

/// A numbered word position in the grid
///
/// Immutable once extracted; cell coordinates are ordered along the fill
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Identity of this slot
    pub id: SlotId,
    /// Ordered cell positions, length >= 2
    pub cells: Vec<SlotCell>,
    /// Clue text, empty when no clue list entry exists
    pub clue: String,
    /// Known answer, empty when no clue list entry exists
    pub answer: String,
}

impl Slot {
    /// Word length of this slot
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the slot has no cells (never true for extracted slots)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Length of the maximal free-cell run starting at `(x, y)`
fn run_length(grid: &Grid, x: usize, y: usize, direction: Direction) -> usize {
    let mut length = 0;
    let (mut cx, mut cy) = (x, y);
    while grid.cell(cx, cy).is_some_and(Cell::is_free) {
        length += 1;
        match direction {
            Direction::Across => cx += 1,
            Direction::Down => cy += 1,
        }
    }
    length
}

/// Whether the cell before `(x, y)` along `direction` is free
fn predecessor_free(grid: &Grid, x: usize, y: usize, direction: Direction) -> bool {
    let previous = match direction {
        Direction::Across => x.checked_sub(1).map(|px| (px, y)),
        Direction::Down => y.checked_sub(1).map(|py| (x, py)),
    };
    previous.is_some_and(|(px, py)| grid.cell(px, py).is_some_and(Cell::is_free))
}

fn build_slot(x: usize, y: usize, number: u32, direction: Direction, length: usize) -> Slot {
    let cells = (0..length)
        .map(|index| match direction {
            Direction::Across => SlotCell { x: x + index, y, index },
            Direction::Down => SlotCell { x, y: y + index, index },
        })
        .collect();

    Slot {
        id: SlotId { direction, number },
        cells,
        clue: String::new(),
        answer: String::new(),
    }
}

/// Attach clues to slots positionally, by order of appearance
///
/// A clue list shorter than the slot list leaves the excess slots with empty
/// clue and answer fields; a longer list is truncated.
fn assign_clues(slots: &mut [Slot], clues: &[Clue]) {
    for (slot, clue) in slots.iter_mut().zip(clues) {
        slot.clue = clue.text.clone();
        slot.answer = clue.answer.clone();
    }
}

/// Derive numbered across and down slots from a grid's blocked-cell layout
///
/// A cell starts an across slot iff it is free, its left neighbor is off-grid
/// or blocked, and at least one more free cell follows to the right; down is
/// symmetric with the upward neighbor and a downward run. A free cell walled
/// in on both sides in a direction contributes no slot in that direction.
///
/// Deterministic: the same grid always yields the same slots, ordering, and
/// numbering.
pub fn extract_slots(
    grid: &Grid,
    clues_across: &[Clue],
    clues_down: &[Clue],
) -> (Vec<Slot>, Vec<Slot>) {
    let mut across = Vec::new();
    let mut down = Vec::new();
    let mut counter: u32 = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.cell(x, y).is_some_and(Cell::is_free) {
                continue;
            }

            let across_run = if predecessor_free(grid, x, y, Direction::Across) {
                0
            } else {
                run_length(grid, x, y, Direction::Across)
            };
            let down_run = if predecessor_free(grid, x, y, Direction::Down) {
                0
            } else {
                run_length(grid, x, y, Direction::Down)
            };

            let starts_across = across_run >= 2;
            let starts_down = down_run >= 2;
            if !starts_across && !starts_down {
                continue;
            }

            // One number per starting cell, shared across directions
            counter += 1;

            if starts_across {
                across.push(build_slot(x, y, counter, Direction::Across, across_run));
            }
            if starts_down {
                down.push(build_slot(x, y, counter, Direction::Down, down_run));
            }
        }
    }

    assign_clues(&mut across, clues_across);
    assign_clues(&mut down, clues_down);

    (across, down)
}
