//! Render labelled preview sheets of an existing 2D tile atlas into `docs/`.

use anyhow::Result;
use artgen::cli;

fn main() -> Result<()> {
    cli::init_logging(false)?;
    let config = cli::load_config(None)?;
    cli::run_preview(&config)
}
