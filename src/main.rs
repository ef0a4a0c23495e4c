//! CLI entry point for hexagram grid artwork generation

use clap::Parser;
use hexagrid::io::cli::{Cli, FileProcessor};

fn main() -> hexagrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
