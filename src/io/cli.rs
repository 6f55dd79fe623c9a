//! Command-line interface for filling puzzle files from word lists

use crate::dictionary::index::Dictionary;
use crate::io::configuration::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::load_puzzle;
use crate::io::progress::SolveProgress;
use crate::io::wordlist::load_word_lists;
use crate::puzzle::slots::extract_slots;
use crate::solver::state::SolverConfig;
use crate::solver::verify::verify_fill;
use crate::solver::{exhaustive, heuristic};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridfill")]
#[command(
    author,
    version,
    about = "Fill crossword grids from a word dictionary by backtracking search"
)]
/// Command-line arguments for the autofill tool
pub struct Cli {
    /// Puzzle file: one row per line, '#' blocked, '.' empty, letters prefilled
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Word list files, one word per line
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    pub words: Vec<PathBuf>,

    /// Random seed for reproducible heuristic fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum iterations before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Use exhaustive depth-first search instead of the heuristic mode
    #[arg(short, long)]
    pub exhaustive: bool,

    /// Verify the filled grid against the dictionary afterwards
    #[arg(short, long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one load-solve-report cycle
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, run the solver, and print the outcome
    ///
    /// A failed fill is still a normal outcome (exit 0 with
    /// `success = false` in the summary); only validation and I/O problems
    /// return errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the iteration cap is zero, the puzzle or word
    /// lists cannot be loaded, the grid fails validation, or an extraction
    /// invariant is violated.
    // Terminal output is this tool's entire purpose
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let started = Instant::now();

        if self.cli.iterations == 0 {
            return Err(invalid_parameter(
                "iterations",
                &self.cli.iterations,
                &"must be at least 1",
            ));
        }

        let word_lists = load_word_lists(&self.cli.words)?;
        let dictionary = Dictionary::build(&word_lists);
        let grid = load_puzzle(&self.cli.puzzle)?;
        let (across, down) = extract_slots(&grid, &[], &[]);

        if !self.cli.quiet {
            let stats = dictionary.stats();
            eprintln!(
                "Dictionary: {} words across {} lengths; grid: {}x{}, {} across / {} down slots",
                stats.total_words,
                stats.bucket_count,
                grid.width(),
                grid.height(),
                across.len(),
                down.len()
            );
        }

        let config = SolverConfig::new(self.cli.iterations, self.cli.seed);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| SolveProgress::new(config.max_iterations));

        let report = if self.cli.exhaustive {
            exhaustive::solve(&grid, &across, &down, &dictionary, config, progress)?
        } else {
            heuristic::solve(&grid, &across, &down, &dictionary, config, progress)?
        };

        print!("{}", report.grid.render());
        println!(
            "{}: filled {} words in {} iterations ({:.2?})",
            if report.success { "Solved" } else { "Incomplete" },
            report.filled_count,
            report.iterations,
            started.elapsed()
        );

        if self.cli.check {
            let check = verify_fill(&report.grid, &across, &down, &dictionary)?;
            if check.is_clean() {
                println!("Check: all slots hold dictionary words");
            } else {
                println!(
                    "Check: {} unfilled cells, {} incomplete slots, {} non-dictionary words",
                    check.unfilled_cells,
                    check.incomplete_slots.len(),
                    check.invalid_words.len()
                );
                for (id, word) in &check.invalid_words {
                    println!("  {} {}: \"{word}\"", id.number, id.direction);
                }
            }
        }

        Ok(())
    }
}
