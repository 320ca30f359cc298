//! Write the isometric block tileset; `assets/textures/terrain/` must exist.

use anyhow::Result;
use artgen::cli;

fn main() -> Result<()> {
    cli::init_logging(false)?;
    let config = cli::load_config(None)?;
    cli::run_isometric(&config)
}
