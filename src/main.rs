//! CLI entry point for the crossword autofill tool

use clap::Parser;
use gridfill::io::cli::{Cli, SolveRunner};

fn main() -> gridfill::Result<()> {
    let cli = Cli::parse();
    SolveRunner::new(cli).run()
}
