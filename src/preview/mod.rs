//! Labelled preview sheets of the 2D terrain atlas.
//!
//! Two layouts are produced from an existing atlas file: a single column of
//! enlarged tiles and a 4x2 grid. Each tile carries its terrain name,
//! horizontally centered under it.

use crate::error::{ArtError, Result};
use crate::font_tools::LabelFont;
use crate::renderer::{save_image, upscale_nearest};
use crate::tileset::{self, Terrain, NUM_TILES, TILE_SIZE};
use image::{imageops, Rgb, RgbImage};
use std::path::Path;
use tracing::{debug, info};

pub const PREVIEW_SCALE: u32 = 4;
pub const SPACING: u32 = 10;
pub const LABEL_HEIGHT: u32 = 30;
pub const GRID_COLUMNS: u32 = 4;
/// Gap between a tile and its label
const LABEL_OFFSET: u32 = 5;

const BACKGROUND: Rgb<u8> = Rgb([40, 40, 40]);
const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

pub const SCALED_TILE: u32 = TILE_SIZE * PREVIEW_SCALE;

/// Where each enlarged tile goes on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Column,
    Grid,
}

impl Layout {
    pub fn sheet_size(self) -> (u32, u32) {
        match self {
            Layout::Column => (
                SCALED_TILE + SPACING * 2,
                (SCALED_TILE + LABEL_HEIGHT + SPACING) * NUM_TILES as u32 + SPACING,
            ),
            Layout::Grid => (
                SCALED_TILE * GRID_COLUMNS + SPACING * (GRID_COLUMNS + 1),
                SCALED_TILE * 2 + SPACING * 3 + LABEL_HEIGHT * 2,
            ),
        }
    }

    /// Top-left corner of the enlarged tile `index`
    pub fn tile_position(self, index: usize) -> (u32, u32) {
        let index = index as u32;
        let row_pitch = SCALED_TILE + LABEL_HEIGHT + SPACING;
        match self {
            Layout::Column => (SPACING, SPACING + index * row_pitch),
            Layout::Grid => {
                let col = index % GRID_COLUMNS;
                let row = index / GRID_COLUMNS;
                (SPACING + col * (SCALED_TILE + SPACING), SPACING + row * row_pitch)
            }
        }
    }
}

/// Left edge that centers `text_width` under a tile starting at `tile_x`
pub fn centered_label_x(tile_x: u32, text_width: u32) -> i32 {
    tile_x as i32 + (SCALED_TILE as i32 - text_width as i32).div_euclid(2)
}

/// Load the atlas the preview is built from
pub fn load_atlas(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(ArtError::MissingSource(path.to_path_buf()));
    }
    let atlas = image::open(path)?.to_rgb8();
    tileset::check_atlas_dimensions(atlas.width(), atlas.height())?;
    debug!(path = %path.display(), width = atlas.width(), height = atlas.height(), "loaded atlas");
    Ok(atlas)
}

/// Compose one preview sheet
pub fn render_sheet(atlas: &RgbImage, layout: Layout, font: &LabelFont) -> Result<RgbImage> {
    let (width, height) = layout.sheet_size();
    let mut sheet = RgbImage::from_pixel(width, height, BACKGROUND);

    for (i, terrain) in Terrain::ALL.iter().enumerate() {
        let tile = tileset::tile_from_atlas(atlas, i)?;
        let enlarged = upscale_nearest(&tile, PREVIEW_SCALE);
        let (x, y) = layout.tile_position(i);
        imageops::replace(&mut sheet, &enlarged, x as i64, y as i64);

        let label = terrain.label();
        let text_x = centered_label_x(x, font.text_width(label));
        let text_y = (y + SCALED_TILE + LABEL_OFFSET) as i32;
        font.draw_text(&mut sheet, text_x, text_y, label, LABEL_COLOR);
    }

    Ok(sheet)
}

/// Paths written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOutputs {
    pub column: std::path::PathBuf,
    pub grid: std::path::PathBuf,
}

/// Read `source` and write both preview sheets; output directories must exist
pub fn generate(source: &Path, column_output: &Path, grid_output: &Path, font: &LabelFont) -> Result<PreviewOutputs> {
    let atlas = load_atlas(source)?;

    let column = render_sheet(&atlas, Layout::Column, font)?;
    save_image(&column, column_output)?;

    let grid = render_sheet(&atlas, Layout::Grid, font)?;
    save_image(&grid, grid_output)?;

    info!(source = %source.display(), "tileset previews generated");

    Ok(PreviewOutputs {
        column: column_output.to_path_buf(),
        grid: grid_output.to_path_buf(),
    })
}
