use anyhow::Result;
use clap::Parser;

use artgen::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::init_logging(args.verbose)?;

    let config = cli::load_config(args.config.as_deref())?;
    cli::run(&args.command, &config)?;

    Ok(())
}
