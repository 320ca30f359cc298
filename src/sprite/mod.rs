//! Pixel-art player sprite: a caped adventurer with a sword.
//!
//! Regions are painted back to front onto a transparent canvas, then a
//! single outline pass darkens every opaque pixel that touches
//! transparency.

pub mod shapes;

use crate::error::Result;
use crate::renderer::{save_image, scale, upscale_nearest, Canvas};
use image::{Rgb, Rgba, RgbaImage};
use shapes::Point;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SPRITE_SIZE: usize = 32;
pub const PREVIEW_SCALE: u32 = 4;

/// Alpha above which a pixel counts as part of the silhouette
const OPAQUE_ALPHA: u8 = 128;
/// Alpha below which a neighbor counts as background
const CLEAR_ALPHA: u8 = 10;
const OUTLINE_DARKEN: f64 = 0.3;

const NEIGHBORS: [Point; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub skin: Rgba<u8>,
    pub hair: Rgba<u8>,
    pub armor_primary: Rgba<u8>,
    pub armor_accent: Rgba<u8>,
    pub cape: Rgba<u8>,
    pub weapon: Rgba<u8>,
    pub weapon_handle: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub boot: Rgba<u8>,
    pub eye: Rgba<u8>,
    pub skin_shadow: Rgba<u8>,
}

impl Default for Palette {
    /// Medieval adventurer: steel armor with bronze trim, red cape
    fn default() -> Self {
        Self {
            skin: Rgba([242, 194, 165, 255]),
            hair: Rgba([76, 51, 25, 255]),
            armor_primary: Rgba([102, 115, 127, 255]),
            armor_accent: Rgba([153, 127, 76, 255]),
            cape: Rgba([178, 25, 25, 255]),
            weapon: Rgba([127, 127, 140, 255]),
            weapon_handle: Rgba([102, 63, 38, 255]),
            outline: Rgba([25, 25, 25, 255]),
            boot: Rgba([76, 63, 51, 255]),
            eye: Rgba([51, 76, 102, 255]),
            skin_shadow: Rgba([216, 168, 140, 255]),
        }
    }
}

/// Sprite regions in paint order; later layers overwrite earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Cape,
    Torso,
    ChestTrim,
    LeftArm,
    RightArm,
    Legs,
    Head,
    Hair,
    Eyes,
    FaceShadow,
    HelmetTrim,
    Blade,
    Handle,
}

impl Layer {
    /// Back to front: cape behind the body, weapon in front of everything
    pub const PAINT_ORDER: [Layer; 13] = [
        Layer::Cape,
        Layer::Torso,
        Layer::ChestTrim,
        Layer::LeftArm,
        Layer::RightArm,
        Layer::Legs,
        Layer::Head,
        Layer::Hair,
        Layer::Eyes,
        Layer::FaceShadow,
        Layer::HelmetTrim,
        Layer::Blade,
        Layer::Handle,
    ];

    /// Every pixel this layer writes, with its color
    pub fn pixels(self, palette: &Palette) -> Vec<(Point, Rgba<u8>)> {
        let solid = |points: &[Point], color: Rgba<u8>| -> Vec<(Point, Rgba<u8>)> {
            points.iter().map(|&p| (p, color)).collect()
        };
        let arm = |points: &[Point]| -> Vec<(Point, Rgba<u8>)> {
            points
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let color = if i < shapes::ARMORED_ARM_PIXELS {
                        palette.armor_primary
                    } else {
                        palette.skin
                    };
                    (p, color)
                })
                .collect()
        };

        match self {
            Layer::Cape => solid(shapes::CAPE, palette.cape),
            Layer::Torso => {
                let ((x0, y0), (x1, y1)) = shapes::TORSO;
                (x0..x1)
                    .flat_map(|x| (y0..y1).map(move |y| (x, y)))
                    .filter(|p| !shapes::TORSO_CORNERS.contains(p))
                    .map(|p| (p, palette.armor_primary))
                    .collect()
            }
            Layer::ChestTrim => solid(shapes::CHEST_TRIM, palette.armor_accent),
            Layer::LeftArm => arm(shapes::LEFT_ARM),
            Layer::RightArm => arm(shapes::RIGHT_ARM),
            Layer::Legs => {
                let mut pixels = solid(shapes::LEFT_LEG, palette.armor_primary);
                pixels.extend(solid(shapes::LEFT_BOOT, palette.boot));
                pixels.extend(solid(shapes::RIGHT_LEG, palette.armor_primary));
                pixels.extend(solid(shapes::RIGHT_BOOT, palette.boot));
                pixels
            }
            Layer::Head => {
                let ((x0, y0), (x1, y1)) = shapes::HEAD;
                (x0..x1)
                    .flat_map(|x| (y0..y1).map(move |y| ((x, y), palette.skin)))
                    .collect()
            }
            Layer::Hair => solid(shapes::HAIR, palette.hair),
            Layer::Eyes => solid(shapes::EYES, palette.eye),
            Layer::FaceShadow => solid(shapes::FACE_SHADOW, palette.skin_shadow),
            Layer::HelmetTrim => solid(shapes::HELMET_TRIM, palette.armor_accent),
            Layer::Blade => solid(shapes::BLADE, palette.weapon),
            Layer::Handle => {
                let mut pixels = solid(shapes::HANDLE, palette.weapon_handle);
                pixels.extend(solid(shapes::CROSS_GUARD, palette.weapon));
                pixels
            }
        }
    }

    pub fn paint(self, canvas: &mut Canvas, palette: &Palette) {
        for ((x, y), color) in self.pixels(palette) {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Paint every layer in order, without the outline pass
pub fn paint_layers(palette: &Palette) -> Canvas {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);
    for layer in Layer::PAINT_ORDER {
        layer.paint(&mut canvas, palette);
        debug!(?layer, "painted layer");
    }
    canvas
}

fn touches_background(snapshot: &Canvas, x: i32, y: i32) -> bool {
    NEIGHBORS.iter().any(|&(dx, dy)| {
        snapshot
            .get_pixel(x + dx, y + dy)
            .is_some_and(|n| n[3] < CLEAR_ALPHA)
    })
}

/// Darken silhouette edges.
///
/// Neighbors are read from a snapshot taken before any pixel changes, and
/// an edge pixel is darkened exactly once however many transparent
/// neighbors it has. Neighbors outside the canvas do not count.
pub fn apply_outline(canvas: &mut Canvas) {
    let snapshot = canvas.clone();

    for y in 0..snapshot.height() as i32 {
        for x in 0..snapshot.width() as i32 {
            let Some(Rgba([r, g, b, a])) = snapshot.get_pixel(x, y) else {
                continue;
            };
            if a <= OPAQUE_ALPHA || !touches_background(&snapshot, x, y) {
                continue;
            }
            let Rgb([r, g, b]) = scale(Rgb([r, g, b]), OUTLINE_DARKEN);
            canvas.set_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
}

pub fn render_sprite_with(palette: &Palette) -> RgbaImage {
    let mut canvas = paint_layers(palette);
    apply_outline(&mut canvas);
    canvas.into_image()
}

/// The 32x32 player sprite with the default palette
pub fn render_sprite() -> RgbaImage {
    render_sprite_with(&Palette::default())
}

/// `player.png` -> `player_preview.png`, next to the sprite
pub fn preview_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let preview_name = match name.strip_suffix(".png") {
        Some(stem) => format!("{}_preview.png", stem),
        None => format!("{}_preview.png", name),
    };
    output.with_file_name(preview_name)
}

/// Paths written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteOutputs {
    pub sprite: PathBuf,
    pub preview: PathBuf,
}

/// Write the sprite and its 4x preview; the parent directory must exist
pub fn generate(output: &Path) -> Result<SpriteOutputs> {
    let sprite = render_sprite();
    save_image(&sprite, output)?;

    let preview = preview_path(output);
    let large = upscale_nearest(&sprite, PREVIEW_SCALE);
    save_image(&large, &preview)?;

    info!(sprite = %output.display(), preview = %preview.display(), "player sprite generated");

    Ok(SpriteOutputs {
        sprite: output.to_path_buf(),
        preview,
    })
}
