//! Post-solve verification of a filled grid

use crate::dictionary::index::Dictionary;
use crate::dictionary::pattern::Pattern;
use crate::io::error::Result;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::{Slot, SlotId};

/// Findings from checking a grid against its slots and dictionary
#[derive(Debug, Clone, Default)]
pub struct FillCheck {
    /// Free cells still without a letter
    pub unfilled_cells: usize,
    /// Slots still containing unknown letters
    pub incomplete_slots: Vec<SlotId>,
    /// Completed slots whose word is not in the dictionary
    pub invalid_words: Vec<(SlotId, String)>,
}

impl FillCheck {
    /// Whether the grid is fully filled with dictionary words
    pub fn is_clean(&self) -> bool {
        self.unfilled_cells == 0 && self.incomplete_slots.is_empty() && self.invalid_words.is_empty()
    }
}

/// Check that every slot holds a complete, dictionary-valid word
///
/// # Errors
///
/// Returns [`crate::FillError::SlotInvariant`] if a zero-length slot reaches
/// pattern projection.
pub fn verify_fill(
    grid: &Grid,
    across: &[Slot],
    down: &[Slot],
    dictionary: &Dictionary,
) -> Result<FillCheck> {
    let mut check = FillCheck {
        unfilled_cells: grid.unfilled_count(),
        ..FillCheck::default()
    };

    for slot in across.iter().chain(down) {
        let pattern = Pattern::from_grid(grid, slot)?;
        if pattern.is_complete() {
            if !dictionary.is_valid(pattern.as_str()) {
                check
                    .invalid_words
                    .push((slot.id, pattern.as_str().to_string()));
            }
        } else {
            check.incomplete_slots.push(slot.id);
        }
    }

    Ok(check)
}
