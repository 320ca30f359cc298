use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while synthesizing or writing art assets
#[derive(Debug, Error)]
pub enum ArtError {
    #[error("Source atlas not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Atlas is {width}x{height}, need at least {needed_width}x{needed_height}")]
    AtlasTooSmall {
        width: u32,
        height: u32,
        needed_width: u32,
        needed_height: u32,
    },

    #[error("Tile index {index} out of range (atlas holds {count} tiles)")]
    TileIndex { index: usize, count: usize },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Font error: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, ArtError>;
