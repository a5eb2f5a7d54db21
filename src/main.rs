//! CLI entry point for the recursive subdivision mosaic generator

use clap::Parser;
use tilemosaic::io::cli::{Cli, LayoutProcessor};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .parse_default_env()
        .init();

    let mut processor = LayoutProcessor::new(cli);
    processor.process()?;
    Ok(())
}
