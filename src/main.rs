//! CLI entry point for the level region inspector

use clap::Parser;
use fillgrid::io::cli::{Cli, Inspector};
use fillgrid::io::logging;

fn main() -> fillgrid::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let inspector = Inspector::new(cli);
    inspector.run(&mut std::io::stdout().lock())?;
    Ok(())
}
