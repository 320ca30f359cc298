use crate::error::{ArtError, Result};
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use fontdue::{Font as FontdueFont, FontSettings};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Ink extent of a laid-out string, relative to the pen origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub right: i32,
}

impl TextBounds {
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }
}

/// Anti-aliased TrueType text via fontdue
pub struct TrueTypeFont {
    font: FontdueFont,
    font_size: f32,
    /// Distance from the top of the line box to the baseline
    ascent_px: f32,
}

impl TrueTypeFont {
    pub fn from_file(path: &Path, font_size: f32) -> Result<Self> {
        let font_data = std::fs::read(path)
            .map_err(|e| ArtError::Font(format!("Failed to read font file '{}': {}", path.display(), e)))?;
        Self::from_bytes(&font_data, font_size)
    }

    /// System default sans-serif face
    pub fn from_system_sans(font_size: f32) -> Result<Self> {
        let handle = SystemSource::new()
            .select_best_match(&[FamilyName::SansSerif], &Properties::new())
            .map_err(|e| ArtError::Font(format!("No system sans-serif font: {}", e)))?;
        let font = handle
            .load()
            .map_err(|e| ArtError::Font(format!("Failed to load font data: {}", e)))?;
        let font_bytes = font
            .copy_font_data()
            .ok_or_else(|| ArtError::Font("Failed to copy font data".to_string()))?;

        Self::from_bytes(&font_bytes, font_size)
    }

    pub fn from_bytes(font_data: &[u8], font_size: f32) -> Result<Self> {
        let font = FontdueFont::from_bytes(font_data, FontSettings::default())
            .map_err(|e| ArtError::Font(format!("Failed to parse font: {}", e)))?;

        let face = ttf_parser::Face::parse(font_data, 0)
            .map_err(|e| ArtError::Font(format!("Failed to parse font metrics: {:?}", e)))?;
        let scale = font_size / face.units_per_em() as f32;
        let ascent_px = face.ascender() as f32 * scale;

        tracing::debug!(font_size, ascent_px, "loaded TrueType font");

        Ok(Self {
            font,
            font_size,
            ascent_px,
        })
    }

    /// Pen x position of every character, kerning applied
    fn layout(&self, text: &str) -> Vec<(char, f32)> {
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;
        let mut placed = Vec::with_capacity(text.len());

        for ch in text.chars() {
            if let Some(kern) = prev.and_then(|p| self.font.horizontal_kern(p, ch, self.font_size)) {
                pen += kern;
            }
            placed.push((ch, pen));
            pen += self.font.metrics(ch, self.font_size).advance_width;
            prev = Some(ch);
        }

        placed
    }

    /// Horizontal ink bounds of `text` drawn with the pen at x = 0
    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds: Option<TextBounds> = None;

        for (ch, pen) in self.layout(text) {
            let metrics = self.font.metrics(ch, self.font_size);
            if metrics.width == 0 {
                continue;
            }
            let left = pen.round() as i32 + metrics.xmin;
            let right = left + metrics.width as i32;
            bounds = Some(match bounds {
                Some(b) => TextBounds {
                    left: b.left.min(left),
                    right: b.right.max(right),
                },
                None => TextBounds { left, right },
            });
        }

        bounds.unwrap_or_default()
    }

    /// Blend `text` onto `img`; `(x, y)` is the pen origin at the top of the line box
    pub fn draw_text(&self, img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let baseline = y + self.ascent_px.round() as i32;

        for (ch, pen) in self.layout(text) {
            let (metrics, coverage) = self.font.rasterize(ch, self.font_size);
            let origin_x = x + pen.round() as i32 + metrics.xmin;
            let origin_y = baseline - metrics.ymin - metrics.height as i32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let alpha = coverage[gy * metrics.width + gx];
                    if alpha == 0 {
                        continue;
                    }
                    let px = origin_x + gx as i32;
                    let py = origin_y + gy as i32;
                    if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                        continue;
                    }
                    let dst = img.get_pixel_mut(px as u32, py as u32);
                    *dst = blend(*dst, color, alpha);
                }
            }
        }
    }
}

fn blend(Rgb(bg): Rgb<u8>, Rgb(fg): Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let a = alpha as u32;
    let mix = |b: u8, f: u8| ((f as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
    Rgb([mix(bg[0], fg[0]), mix(bg[1], fg[1]), mix(bg[2], fg[2])])
}
