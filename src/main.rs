//! CLI entry point for headless tower simulation runs

use clap::Parser;
use towergrid::io::cli::{Cli, TowerRunner};
use towergrid::io::logging::init_logging;

fn main() -> towergrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;
    TowerRunner::new(cli).run().map(|_| ())
}
