//! Flat 2D terrain atlas.
//!
//! Each terrain is a closed-form color function of the pixel position.
//! Tiles are packed left to right into a single strip with no gaps.

use crate::error::{ArtError, Result};
use crate::renderer::{channel, modulate, save_image, scale};
use image::{imageops, Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const TILE_SIZE: u32 = 32;
pub const NUM_TILES: usize = Terrain::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    DeepWater,
    ShallowWater,
    Sand,
    Grass,
    Dirt,
    Stone,
    Snow,
    Forest,
}

/// `sin(a*x + b*y) * cos(c*x - d*y)`
fn noise(x: f64, y: f64, [a, b, c, d]: [f64; 4]) -> f64 {
    (x * a + y * b).sin() * (x * c - y * d).cos()
}

/// `sin(a*x + b*y)` remapped into [0, 1]
fn wave(x: f64, y: f64, a: f64, b: f64) -> f64 {
    (x * a + y * b).sin() * 0.5 + 0.5
}

impl Terrain {
    /// Atlas order
    pub const ALL: [Terrain; 8] = [
        Terrain::DeepWater,
        Terrain::ShallowWater,
        Terrain::Sand,
        Terrain::Grass,
        Terrain::Dirt,
        Terrain::Stone,
        Terrain::Snow,
        Terrain::Forest,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Human readable name used on preview sheets
    pub fn label(self) -> &'static str {
        match self {
            Terrain::DeepWater => "Deep Water",
            Terrain::ShallowWater => "Shallow Water",
            Terrain::Sand => "Sand",
            Terrain::Grass => "Grass",
            Terrain::Dirt => "Dirt",
            Terrain::Stone => "Stone",
            Terrain::Snow => "Snow",
            Terrain::Forest => "Forest",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Terrain::DeepWater => "deep_water",
            Terrain::ShallowWater => "shallow_water",
            Terrain::Sand => "sand",
            Terrain::Grass => "grass",
            Terrain::Dirt => "dirt",
            Terrain::Stone => "stone",
            Terrain::Snow => "snow",
            Terrain::Forest => "forest",
        }
    }

    /// Color of the pixel at `(x, y)` inside a tile
    pub fn color(self, x: u32, y: u32) -> Rgb<u8> {
        let (fx, fy) = (x as f64, y as f64);

        match self {
            Terrain::DeepWater => modulate([25, 51, 115], [13.0; 3], wave(fx, fy, 0.3, 0.2)),
            Terrain::ShallowWater => modulate([51, 102, 153], [13.0; 3], wave(fx, fy, 0.4, 0.3)),
            Terrain::Sand => modulate([217, 199, 140], [17.0; 3], noise(fx, fy, [0.7, 0.5, 0.3, 0.8])),
            Terrain::Grass => {
                // Blade flecks
                if (x * 7 + y * 5) % 17 < 3 {
                    return Rgb([64, 128, 51]);
                }
                modulate([76, 153, 64], [25.0; 3], noise(fx, fy, [0.4, 0.6, 0.5, 0.4]))
            }
            Terrain::Dirt => modulate([102, 64, 38], [38.0; 3], noise(fx, fy, [0.8, 0.7, 0.6, 0.9])),
            Terrain::Stone => {
                modulate([127, 127, 127], [25.0, 25.0, 26.0], noise(fx, fy, [0.5, 0.6, 0.4, 0.7]))
            }
            Terrain::Snow => {
                let n = noise(fx, fy, [0.6, 0.8, 0.7, 0.5]);
                Rgb([channel(242.0 + n * 7.0), channel(242.0 + n * 7.0), 255])
            }
            Terrain::Forest => {
                let base = modulate([51, 127, 38], [20.0; 3], noise(fx, fy, [0.5, 0.6, 0.4, 0.7]));
                // Tree shadow patches
                if (x * 3 + y * 5) % 13 < 5 {
                    scale(base, 0.6)
                } else {
                    base
                }
            }
        }
    }
}

pub fn render_tile(terrain: Terrain) -> RgbImage {
    RgbImage::from_fn(TILE_SIZE, TILE_SIZE, |x, y| terrain.color(x, y))
}

/// Render every terrain and pack them into a horizontal strip
pub fn build_atlas() -> RgbImage {
    let mut atlas = RgbImage::new(TILE_SIZE * NUM_TILES as u32, TILE_SIZE);

    for (i, &terrain) in Terrain::ALL.iter().enumerate() {
        let tile = render_tile(terrain);
        let x_offset = i as i64 * TILE_SIZE as i64;
        imageops::replace(&mut atlas, &tile, x_offset, 0);
        debug!(terrain = terrain.slug(), x_offset, "packed tile");
    }

    atlas
}

/// Fail unless `atlas` is large enough to hold every terrain tile
pub fn check_atlas_dimensions(width: u32, height: u32) -> Result<()> {
    let needed_width = TILE_SIZE * NUM_TILES as u32;
    if width < needed_width || height < TILE_SIZE {
        return Err(ArtError::AtlasTooSmall {
            width,
            height,
            needed_width,
            needed_height: TILE_SIZE,
        });
    }
    Ok(())
}

/// Crop tile `index` back out of an atlas (columns `[32i, 32i + 32)`)
pub fn tile_from_atlas(atlas: &RgbImage, index: usize) -> Result<RgbImage> {
    if index >= NUM_TILES {
        return Err(ArtError::TileIndex {
            index,
            count: NUM_TILES,
        });
    }
    check_atlas_dimensions(atlas.width(), atlas.height())?;

    let x = index as u32 * TILE_SIZE;
    Ok(imageops::crop_imm(atlas, x, 0, TILE_SIZE, TILE_SIZE).to_image())
}

/// Build the atlas and write it to `output`, creating parent directories
pub fn generate(output: &Path) -> Result<RgbImage> {
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let atlas = build_atlas();
    save_image(&atlas, output)?;
    info!(tiles = NUM_TILES, "tileset generated");

    Ok(atlas)
}
