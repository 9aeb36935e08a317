//! CLI entry point for the sliding-tile puzzle engine

use clap::Parser;
use tiltboard::io::cli::{Cli, LayoutRunner};

fn main() -> tiltboard::Result<()> {
    let cli = Cli::parse();
    let mut runner = LayoutRunner::new(cli);
    runner.process()
}
