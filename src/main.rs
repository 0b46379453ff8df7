//! CLI entry point for the animated N-queens search

use clap::Parser;
use queentrace::io::cli::{Cli, SearchRunner};

fn main() -> queentrace::Result<()> {
    let cli = Cli::parse();
    let mut runner = SearchRunner::new(cli);
    runner.run()
}
