mod font;
mod truetype_font;

pub use font::BitmapFont;
pub use truetype_font::{TextBounds, TrueTypeFont};

use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::{debug, warn};

/// Font used to caption preview sheets.
///
/// Prefers the configured TrueType file, then any system sans-serif face,
/// then the embedded bitmap font.
pub enum LabelFont {
    TrueType(TrueTypeFont),
    Bitmap { font: BitmapFont, scale: usize },
}

impl LabelFont {
    pub fn load(path: Option<&Path>, size: f32) -> Self {
        if let Some(path) = path {
            match TrueTypeFont::from_file(path, size) {
                Ok(font) => {
                    debug!(path = %path.display(), "using label font");
                    return LabelFont::TrueType(font);
                }
                Err(e) => warn!("{}; trying system fonts", e),
            }
        }

        match TrueTypeFont::from_system_sans(size) {
            Ok(font) => return LabelFont::TrueType(font),
            Err(e) => warn!("{}; using embedded bitmap font", e),
        }

        Self::embedded(size)
    }

    /// The embedded bitmap font, scaled to roughly `size` pixels tall
    pub fn embedded(size: f32) -> Self {
        let font = BitmapFont::load_embedded();
        let scale = ((size / font.height() as f32).floor() as usize).max(1);
        LabelFont::Bitmap { font, scale }
    }

    /// Width of the text's ink bounding box
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            LabelFont::TrueType(font) => font.measure(text).width(),
            LabelFont::Bitmap { font, scale } => font.text_width(text, *scale) as u32,
        }
    }

    pub fn draw_text(&self, img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            LabelFont::TrueType(font) => font.draw_text(img, x, y, text, color),
            LabelFont::Bitmap { font, scale } => font.draw_text(img, x, y, text, color, *scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_label_font_scale() {
        match LabelFont::embedded(14.0) {
            LabelFont::Bitmap { scale, .. } => assert_eq!(scale, 2),
            LabelFont::TrueType(_) => panic!("expected bitmap font"),
        }
        match LabelFont::embedded(3.0) {
            LabelFont::Bitmap { scale, .. } => assert_eq!(scale, 1),
            LabelFont::TrueType(_) => panic!("expected bitmap font"),
        }
    }

    #[test]
    fn test_embedded_text_width() {
        let font = LabelFont::embedded(14.0);
        // 4 glyphs * 6 * 2 - 2
        assert_eq!(font.text_width("Sand"), 46);
    }
}
