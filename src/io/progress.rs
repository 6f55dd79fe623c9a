//! Iteration progress display for long solves

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Iterations: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking solver iterations against the cap
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a progress bar spanning the iteration cap
    pub fn new(max_iterations: usize) -> Self {
        let bar = ProgressBar::new(max_iterations as u64);
        bar.set_style(SOLVE_STYLE.clone());
        Self { bar }
    }

    /// Report the current iteration count
    pub fn observe(&self, iterations: usize) {
        self.bar.set_position(iterations as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
