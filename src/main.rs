//! CLI entry point for checking boards and simulating tile-matching games

use clap::Parser;
use tilematch::io::cli::{Cli, CommandRunner};

fn main() -> tilematch::Result<()> {
    let cli = Cli::parse();
    tilematch::io::logging::init(cli.verbose);
    let mut runner = CommandRunner::new(cli, std::io::stdout().lock());
    runner.process()
}
