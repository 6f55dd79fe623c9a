//! Per-run solver state and the solve result contract

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::io::configuration::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED, PROGRESS_TICK_INTERVAL};
use crate::io::progress::SolveProgress;
use crate::puzzle::grid::Grid;
use crate::puzzle::slots::SlotId;

/// Caller-supplied solve parameters
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Global iteration cap; exceeding it aborts the search
    pub max_iterations: usize,
    /// Seed for the heuristic mode's queue and candidate shuffling
    pub seed: u64,
}

impl SolverConfig {
    /// Create a config with an explicit cap and seed
    pub const fn new(max_iterations: usize, seed: u64) -> Self {
        Self {
            max_iterations,
            seed,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS, DEFAULT_SEED)
    }
}

/// Outcome of a solve run
///
/// Always returned, never thrown: exhaustion and cap expiry are normal
/// outcomes distinguished from validation failures by `success = false` plus
/// the diagnostic counters.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Final grid state (best-effort when `success` is false)
    pub grid: Grid,
    /// Words currently placed in the grid
    pub filled_count: usize,
    /// Iterations consumed by the search
    pub iterations: usize,
    /// Whether every open slot was filled
    pub success: bool,
}

/// Ephemeral bookkeeping for one solve invocation
///
/// Owns its grid copy and sets exclusively; nothing is shared across runs, so
/// concurrent solves against the same dictionary need no locking.
pub(crate) struct SolverState {
    /// Working grid copy; snapshots of this are the backtracking undo unit
    pub(crate) grid: Grid,
    /// Iterations consumed so far
    pub(crate) iterations: usize,
    /// Words currently placed
    pub(crate) filled_count: usize,
    max_iterations: usize,
    capped: bool,
    used_words: HashSet<String>,
    tried: HashMap<SlotId, HashSet<String>>,
    stuck: HashMap<SlotId, usize>,
    rng: StdRng,
    progress: Option<SolveProgress>,
}

impl SolverState {
    pub(crate) fn new(grid: Grid, config: SolverConfig, progress: Option<SolveProgress>) -> Self {
        Self {
            grid,
            iterations: 0,
            filled_count: 0,
            max_iterations: config.max_iterations,
            capped: false,
            used_words: HashSet::new(),
            tried: HashMap::new(),
            stuck: HashMap::new(),
            rng: StdRng::seed_from_u64(config.seed),
            progress,
        }
    }

    /// Consume one iteration; `false` means the cap was exceeded
    pub(crate) fn tick(&mut self) -> bool {
        self.iterations += 1;
        if self.iterations.is_multiple_of(PROGRESS_TICK_INTERVAL) {
            if let Some(progress) = &self.progress {
                progress.observe(self.iterations);
            }
        }
        if self.iterations > self.max_iterations {
            self.capped = true;
            return false;
        }
        true
    }

    /// Whether the iteration cap has been hit
    pub(crate) const fn capped(&self) -> bool {
        self.capped
    }

    pub(crate) fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    pub(crate) fn mark_used(&mut self, word: &str) {
        self.used_words.insert(word.to_string());
    }

    pub(crate) fn unmark_used(&mut self, word: &str) {
        self.used_words.remove(word);
    }

    pub(crate) fn was_tried(&self, slot: SlotId, word: &str) -> bool {
        self.tried.get(&slot).is_some_and(|set| set.contains(word))
    }

    pub(crate) fn mark_tried(&mut self, slot: SlotId, word: &str) {
        self.tried.entry(slot).or_default().insert(word.to_string());
    }

    /// Unsuccessful re-entries recorded for `slot` before this visit
    pub(crate) fn stuck_count(&self, slot: SlotId) -> usize {
        self.stuck.get(&slot).copied().unwrap_or(0)
    }

    pub(crate) fn bump_stuck(&mut self, slot: SlotId) {
        *self.stuck.entry(slot).or_insert(0) += 1;
    }

    pub(crate) fn clear_stuck(&mut self, slot: SlotId) {
        self.stuck.remove(&slot);
    }

    /// Shuffle candidates with this run's seeded generator
    pub(crate) fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Finalize the run into its report
    pub(crate) fn into_report(self, success: bool) -> SolveReport {
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        SolveReport {
            grid: self.grid,
            filled_count: self.filled_count,
            iterations: self.iterations,
            success,
        }
    }
}
