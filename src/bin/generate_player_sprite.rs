//! Write the player sprite and its 4x preview.

use anyhow::Result;
use artgen::cli;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_player_sprite")]
#[command(about = "Generate a 32x32 pixel-art player sprite", long_about = None)]
struct Args {
    /// Output PNG path (default: assets/sprites/player_character.png)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(false)?;

    let config = cli::load_config(None)?;
    cli::run_sprite(&config, args.output.as_deref())?;

    if args.output.is_none() {
        println!("\nTip: pass a custom output path:");
        println!("   generate_player_sprite path/to/output.png");
    }
    Ok(())
}
