//! Write the 2D terrain atlas to `assets/textures/terrain/tileset_2d.png`.

use anyhow::Result;
use artgen::cli;

fn main() -> Result<()> {
    cli::init_logging(false)?;
    let config = cli::load_config(None)?;
    cli::run_tileset(&config)
}
