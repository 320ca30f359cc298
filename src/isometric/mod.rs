//! Isometric block tileset: one diamond-topped cuboid per material.

use crate::error::Result;
use crate::renderer::{darken, fill_polygon, lighten, save_image, stroke_polygon};
use image::{Rgb, Rgba, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

pub const TILE_WIDTH: u32 = 64;
pub const TILE_HEIGHT: u32 = 32;
pub const BLOCK_HEIGHT: u32 = 16;
pub const TILES_PER_ROW: u32 = 4;

const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 128]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub name: &'static str,
    pub color: Rgb<u8>,
}

const fn material(name: &'static str, r: u8, g: u8, b: u8) -> Material {
    Material {
        name,
        color: Rgb([r, g, b]),
    }
}

/// Atlas order
pub const MATERIALS: [Material; 15] = [
    material("water", 51, 102, 204),
    material("sand", 230, 204, 128),
    material("grass", 77, 179, 77),
    material("dirt", 140, 102, 64),
    material("stone", 128, 128, 128),
    material("snow", 242, 242, 255),
    material("wood", 153, 102, 51),
    material("leaves", 51, 153, 51),
    material("cobblestone", 102, 102, 102),
    material("gravel", 153, 140, 128),
    material("ice", 179, 217, 255),
    material("coal_ore", 77, 77, 77),
    material("iron_ore", 179, 153, 128),
    material("gold_ore", 230, 204, 77),
    material("copper_ore", 204, 128, 77),
];

pub fn find_material(name: &str) -> Option<&'static Material> {
    MATERIALS.iter().find(|m| m.name == name)
}

/// Shaded colors for the three visible faces of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceColors {
    pub top: Rgb<u8>,
    pub left: Rgb<u8>,
    pub right: Rgb<u8>,
}

impl FaceColors {
    pub fn from_base(color: Rgb<u8>) -> Self {
        Self {
            top: lighten(color, 0.3),
            left: darken(color, 0.2),
            right: darken(color, 0.1),
        }
    }
}

pub type Quad = [(i32, i32); 4];

/// Block dimensions; every face vertex is a fixed offset from the tile origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    pub tile_width: i32,
    pub tile_height: i32,
    pub block_height: i32,
}

impl Default for BlockGeometry {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH as i32,
            tile_height: TILE_HEIGHT as i32,
            block_height: BLOCK_HEIGHT as i32,
        }
    }
}

impl BlockGeometry {
    /// Vertical space one block occupies in the atlas
    pub fn cell_height(&self) -> i32 {
        self.tile_height + self.block_height
    }

    /// Top diamond, left parallelogram and right parallelogram, in draw order
    pub fn faces(&self, ox: i32, oy: i32) -> [Quad; 3] {
        let (w, h, b) = (self.tile_width, self.tile_height, self.block_height);
        let (hw, hh) = (w / 2, h / 2);

        let top = [(ox + hw, oy), (ox + w, oy + hh), (ox + hw, oy + h), (ox, oy + hh)];
        let left = [
            (ox, oy + hh),
            (ox + hw, oy + h),
            (ox + hw, oy + h + b),
            (ox, oy + hh + b),
        ];
        let right = [
            (ox + hw, oy + h),
            (ox + w, oy + hh),
            (ox + w, oy + hh + b),
            (ox + hw, oy + h + b),
        ];

        [top, left, right]
    }
}

fn opaque(Rgb([r, g, b]): Rgb<u8>) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Fill the three faces, then stroke each one with a translucent outline
pub fn draw_block(img: &mut RgbaImage, geometry: &BlockGeometry, ox: i32, oy: i32, color: Rgb<u8>) {
    let shades = FaceColors::from_base(color);
    let faces = geometry.faces(ox, oy);

    for (face, shade) in faces.iter().zip([shades.top, shades.left, shades.right]) {
        fill_polygon(img, face, opaque(shade));
    }
    for face in &faces {
        stroke_polygon(img, face, OUTLINE);
    }
}

/// Atlas dimensions for `count` blocks
pub fn atlas_size(count: usize, geometry: &BlockGeometry) -> (u32, u32) {
    let rows = (count as u32).div_ceil(TILES_PER_ROW);
    (
        TILES_PER_ROW * geometry.tile_width as u32,
        rows * geometry.cell_height() as u32,
    )
}

/// Tile origin of material `index`
pub fn tile_origin(index: usize, geometry: &BlockGeometry) -> (i32, i32) {
    let col = index as i32 % TILES_PER_ROW as i32;
    let row = index as i32 / TILES_PER_ROW as i32;
    (col * geometry.tile_width, row * geometry.cell_height())
}

pub fn build_isometric_atlas() -> RgbaImage {
    let geometry = BlockGeometry::default();
    let (width, height) = atlas_size(MATERIALS.len(), &geometry);
    let mut atlas = RgbaImage::new(width, height);

    for (idx, material) in MATERIALS.iter().enumerate() {
        let (ox, oy) = tile_origin(idx, &geometry);
        draw_block(&mut atlas, &geometry, ox, oy, material.color);
        debug!(material = material.name, x = ox, y = oy, "drew block");
    }

    atlas
}

/// Build the atlas and write it; the parent directory must already exist
pub fn generate(output: &Path) -> Result<RgbaImage> {
    let atlas = build_isometric_atlas();
    save_image(&atlas, output)?;
    info!(materials = MATERIALS.len(), "isometric tileset generated");
    Ok(atlas)
}
