//! Exhaustive depth-first fill
//!
//! Visits open slots in a fixed order (across in extraction order, then
//! down), trying every candidate the word source offers, in bucket order.
//! No word uniqueness, no retry bounds: the only budget is the global
//! iteration cap, which when exceeded leaves the deepest grid reached in
//! place and reports `success = false`.

use crate::dictionary::pattern::Pattern;
use crate::io::error::Result;
use crate::io::progress::SolveProgress;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::Slot;
use crate::solver::matcher::WordSource;
use crate::solver::placement::{can_place, open_slots, place_word};
use crate::solver::state::{SolveReport, SolverConfig, SolverState};

/// Fill every open slot by exhaustive backtracking
///
/// The caller's grid is never mutated; the report carries a new grid.
/// Exhaustion and cap expiry are reported via `success = false`, not errors.
///
/// # Errors
///
/// Returns [`crate::FillError::SlotInvariant`] only for extraction-invariant
/// violations (a zero-length slot reaching pattern projection).
pub fn solve(
    grid: &Grid,
    across: &[Slot],
    down: &[Slot],
    source: &impl WordSource,
    config: SolverConfig,
    progress: Option<SolveProgress>,
) -> Result<SolveReport> {
    let open = open_slots(grid, across, down)?;
    let mut state = SolverState::new(grid.clone(), config, progress);
    let success = backtrack(&mut state, &open, 0, source)?;
    Ok(state.into_report(success))
}

/// One search frame: try every candidate for `open[index]`, recursing deeper
fn backtrack(
    state: &mut SolverState,
    open: &[&Slot],
    index: usize,
    source: &impl WordSource,
) -> Result<bool> {
    if !state.tick() {
        return Ok(false);
    }

    let Some(slot) = open.get(index) else {
        // Every open slot has been filled
        return Ok(true);
    };

    let pattern = Pattern::from_grid(&state.grid, slot)?;
    for word in source.matching_words(&pattern) {
        if !can_place(&state.grid, slot, &word) {
            continue;
        }

        let snapshot = state.grid.clone();
        place_word(&mut state.grid, slot, &word);
        state.filled_count += 1;

        if backtrack(state, open, index + 1, source)? {
            return Ok(true);
        }
        if state.capped() {
            // Keep the deepest placements so the report shows the best grid
            // reached before the cap
            return Ok(false);
        }

        state.grid = snapshot;
        state.filled_count -= 1;
    }

    Ok(false)
}
