//! CLI entry point for the retro dithering tool

use clap::Parser;
use retrodither::io::cli::{Cli, FileProcessor};
use retrodither::io::logging;

fn main() -> retrodither::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
