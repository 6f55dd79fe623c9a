//! Placement primitives shared by both solver modes

use crate::dictionary::pattern::Pattern;
use crate::io::error::Result;
use crate::puzzle::cell::Cell;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::Slot;

/// Slots whose projected pattern still contains an unknown letter
///
/// Preserves extraction order within each input list; the solver treats the
/// returned order (across first, then down) as its fixed exhaustive ordering.
///
/// # Errors
///
/// Returns [`crate::FillError::SlotInvariant`] if a zero-length slot reaches
/// projection.
pub fn open_slots<'a>(
    grid: &Grid,
    across: &'a [Slot],
    down: &'a [Slot],
) -> Result<Vec<&'a Slot>> {
    let mut open = Vec::new();
    for slot in across.iter().chain(down) {
        if !Pattern::from_grid(grid, slot)?.is_complete() {
            open.push(slot);
        }
    }
    Ok(open)
}

/// Whether `word` can be written into `slot` without conflict
///
/// Requires an exact length match and, for every cell the word would touch,
/// that the cell is empty or already holds the identical letter. This is
/// intersection-only checking: it never confirms that a perpendicular slot
/// retains a viable dictionary candidate after the placement, so the search
/// can walk into locally consistent but globally unsolvable branches.
pub fn can_place(grid: &Grid, slot: &Slot, word: &str) -> bool {
    if word.len() != slot.len() {
        return false;
    }

    slot.cells.iter().zip(word.chars()).all(|(pos, letter)| {
        match grid.cell(pos.x, pos.y) {
            Some(Cell::Empty) => true,
            Some(Cell::Letter(existing)) => existing.eq_ignore_ascii_case(&letter),
            Some(Cell::Blocked) | None => false,
        }
    })
}

/// Write `word` into `slot`, uppercasing each letter
///
/// Callers are expected to have checked [`can_place`] first; cells are
/// overwritten unconditionally.
pub fn place_word(grid: &mut Grid, slot: &Slot, word: &str) {
    for (pos, letter) in slot.cells.iter().zip(word.chars()) {
        grid.set_cell(pos.x, pos.y, Cell::Letter(letter.to_ascii_uppercase()));
    }
}
