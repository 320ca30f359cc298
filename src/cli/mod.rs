use crate::config::ArtConfig;
use crate::font_tools::LabelFont;
use crate::{isometric, preview, sprite, tileset};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "artgen")]
#[command(author, version)]
#[command(about = "Generate placeholder terrain tiles, isometric blocks and a player sprite", long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./artgen.yaml, then the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate the 8-terrain 2D tile atlas
    Tileset,

    /// Generate the isometric block tileset
    Isometric,

    /// Generate the player sprite and its 4x preview
    Sprite {
        /// Output PNG path
        output: Option<PathBuf>,
    },

    /// Render labelled preview sheets of the 2D tile atlas
    Preview,

    /// Run every generator (the preview reads the freshly written atlas)
    All,
}

/// Install the global `tracing` subscriber
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")?;
    Ok(())
}

pub fn load_config(explicit: Option<&Path>) -> Result<ArtConfig> {
    ArtConfig::discover(explicit).with_context(|| match explicit {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Failed to load config".to_string(),
    })
}

pub fn run(command: &Command, config: &ArtConfig) -> Result<()> {
    match command {
        Command::Tileset => run_tileset(config),
        Command::Isometric => run_isometric(config),
        Command::Sprite { output } => run_sprite(config, output.as_deref()),
        Command::Preview => run_preview(config),
        Command::All => {
            run_tileset(config)?;
            run_isometric(config)?;
            run_sprite(config, None)?;
            run_preview(config)
        }
    }
}

pub fn run_tileset(config: &ArtConfig) -> Result<()> {
    println!("=== Generating 2D Tileset Texture ===");
    let output = &config.tileset_output;
    let atlas = tileset::generate(output)
        .with_context(|| format!("Failed to write tileset: {}", output.display()))?;

    println!("✓ Saved to: {}", output.display());
    println!("✓ Size: {}x{} pixels", atlas.width(), atlas.height());
    println!("✓ Tiles: {} types", tileset::NUM_TILES);
    Ok(())
}

pub fn run_isometric(config: &ArtConfig) -> Result<()> {
    println!("=== Isometric Tileset Generator ===");
    println!(
        "Tile size: {}x{}",
        isometric::TILE_WIDTH,
        isometric::TILE_HEIGHT + isometric::BLOCK_HEIGHT
    );
    let output = &config.isometric_output;
    let atlas = isometric::generate(output)
        .with_context(|| format!("Failed to write isometric tileset: {}", output.display()))?;

    println!("✓ Saved to: {}", output.display());
    println!("✓ Size: {}x{}", atlas.width(), atlas.height());
    println!("✓ Tiles: {}", isometric::MATERIALS.len());
    Ok(())
}

pub fn run_sprite(config: &ArtConfig, output: Option<&Path>) -> Result<()> {
    let output = output.unwrap_or(config.sprite_output.as_path());
    let written = sprite::generate(output)
        .with_context(|| format!("Failed to write player sprite: {}", output.display()))?;

    println!("✓ Player sprite saved to: {}", written.sprite.display());
    println!("✓ Preview sprite saved to: {}", written.preview.display());
    println!("  Size: {0}x{0} pixels", sprite::SPRITE_SIZE);
    Ok(())
}

pub fn run_preview(config: &ArtConfig) -> Result<()> {
    let font = LabelFont::load(config.label_font.as_deref(), config.label_font_size);
    let written = preview::generate(
        &config.preview_source,
        &config.preview_output,
        &config.grid_preview_output,
        &font,
    )
    .with_context(|| format!("Failed to build preview from {}", config.preview_source.display()))?;

    println!("✓ Preview saved to: {}", written.column.display());
    println!("✓ Grid preview saved to: {}", written.grid.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sprite_with_output() {
        let args = Args::try_parse_from(["artgen", "sprite", "out/hero.png"]).unwrap();
        assert_eq!(
            args.command,
            Command::Sprite {
                output: Some(PathBuf::from("out/hero.png"))
            }
        );
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["artgen", "tileset", "-v", "--config", "a.yaml"]).unwrap();
        assert_eq!(args.command, Command::Tileset);
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("a.yaml")));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["artgen"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
