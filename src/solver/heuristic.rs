//! Heuristic fill: shuffled queues, word uniqueness, bounded retries
//!
//! Open slots are partitioned into an across queue and a down queue, each
//! shuffled once with the run's seeded generator for placement diversity.
//! The search alternates between queues, falling back to whichever is
//! non-empty when the other runs out. Three pieces of bookkeeping steer it:
//!
//! - a global used-word set, so no word appears twice anywhere in the puzzle;
//! - a per-slot tried set, so a candidate that failed for a slot is never
//!   retried on re-entry within the same run;
//! - a per-slot stuck counter, abandoning the branch outright once a slot has
//!   failed too many re-entries, trading completeness for bounded latency on
//!   degenerate branches.
//!
//! Conflict checking stays intersection-only (see
//! [`crate::solver::placement::can_place`]); perpendicular viability is
//! deliberately not verified.

use crate::dictionary::pattern::Pattern;
use crate::io::configuration::STUCK_THRESHOLD;
use crate::io::error::Result;
use crate::io::progress::SolveProgress;
use crate::puzzle::cell::Direction;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::Slot;
use crate::solver::matcher::WordSource;
use crate::solver::placement::{can_place, open_slots, place_word};
use crate::solver::state::{SolveReport, SolverConfig, SolverState};

/// Fill every open slot with unique words, alternating directions
///
/// The caller's grid is never mutated; the report carries a new grid.
/// Exhaustion, cap expiry, and stuck-bound abandonment all surface as
/// `success = false` plus counters, never as errors.
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

    let mut across_queue: Vec<&Slot> = open
        .iter()
        .copied()
        .filter(|slot| slot.id.direction == Direction::Across)
        .collect();
    let mut down_queue: Vec<&Slot> = open
        .iter()
        .copied()
        .filter(|slot| slot.id.direction == Direction::Down)
        .collect();

    // Shuffled once per run; recursion indexes into the fixed queues
    state.shuffle(&mut across_queue);
    state.shuffle(&mut down_queue);

    let success = backtrack(&mut state, &across_queue, &down_queue, 0, 0, true, source)?;
    Ok(state.into_report(success))
}

/// One search frame: pick the next slot by alternation, try its candidates
fn backtrack(
    state: &mut SolverState,
    across_queue: &[&Slot],
    down_queue: &[&Slot],
    across_index: usize,
    down_index: usize,
    prefer_across: bool,
    source: &impl WordSource,
) -> Result<bool> {
    if !state.tick() {
        return Ok(false);
    }

    if across_index >= across_queue.len() && down_index >= down_queue.len() {
        return Ok(true);
    }

    // Alternate between queues; fall back to the one that still has slots
    let take_across = if across_index >= across_queue.len() {
        false
    } else if down_index >= down_queue.len() {
        true
    } else {
        prefer_across
    };

    let picked = if take_across {
        across_queue.get(across_index)
    } else {
        down_queue.get(down_index)
    };
    let Some(slot) = picked else {
        return Ok(true);
    };
    let slot_id = slot.id;

    let pattern = Pattern::from_grid(&state.grid, slot)?;

    // Stuck bound: once a slot accumulates too many failed re-entries,
    // abandon the whole branch instead of grinding through more candidates
    let previous_failures = state.stuck_count(slot_id);
    state.bump_stuck(slot_id);
    if previous_failures > STUCK_THRESHOLD {
        state.clear_stuck(slot_id);
        return Ok(false);
    }

    let mut candidates: Vec<String> = source
        .matching_words(&pattern)
        .into_iter()
        .filter(|word| !state.is_used(word) && !state.was_tried(slot_id, word))
        .collect();
    state.shuffle(&mut candidates);

    let (next_across, next_down) = if take_across {
        (across_index + 1, down_index)
    } else {
        (across_index, down_index + 1)
    };

    for word in candidates {
        state.mark_tried(slot_id, &word);
        if !can_place(&state.grid, slot, &word) {
            continue;
        }

        let snapshot = state.grid.clone();
        place_word(&mut state.grid, slot, &word);
        state.mark_used(&word);
        state.filled_count += 1;
        // The slot may be revisited later through intersecting backtracking;
        // a successful placement earns it a fresh failure budget
        state.clear_stuck(slot_id);

        if backtrack(
            state,
            across_queue,
            down_queue,
            next_across,
            next_down,
            !prefer_across,
            source,
        )? {
            return Ok(true);
        }
        if state.capped() {
            // Keep the deepest placements so the report shows the best grid
            // reached before the cap
            return Ok(false);
        }

        state.grid = snapshot;
        state.unmark_used(&word);
        state.filled_count -= 1;
    }

    Ok(false)
}
