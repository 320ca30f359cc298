use crate::assets;
use crate::error::{ArtError, Result};
use image::{Rgb, RgbImage};

const GLYPH_SLOTS: usize = 256;

/// Fixed-cell bitmap font parsed from the `.fd` text format.
///
/// ```text
/// height 7
/// width 5
/// char 65
/// .xxx.
/// x...x
/// ...
/// ```
pub struct BitmapFont {
    width: usize,
    height: usize,
    glyphs: Vec<Option<Vec<bool>>>,
}

impl BitmapFont {
    /// The embedded label font, or a box-glyph font if it cannot be read
    pub fn load_embedded() -> Self {
        match assets::font_source(assets::DEFAULT_LABEL_FONT) {
            Some(source) => match Self::parse_fd(&source) {
                Ok(font) => return font,
                Err(e) => tracing::warn!("Failed to parse embedded font: {}", e),
            },
            None => tracing::warn!(
                "Embedded font '{}' not found. Available fonts: {:?}",
                assets::DEFAULT_LABEL_FONT,
                assets::font_names()
            ),
        }
        Self::fallback_font()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    /// Glyph bitmap for `ch`; lowercase letters borrow the capital glyph,
    /// anything else unknown renders blank
    pub fn glyph(&self, ch: char) -> Option<&[bool]> {
        let lookup = |c: char| {
            let code = c as usize;
            if code < GLYPH_SLOTS {
                self.glyphs[code].as_deref()
            } else {
                None
            }
        };
        lookup(ch).or_else(|| lookup(ch.to_ascii_uppercase()))
    }

    /// Horizontal distance between consecutive characters at `scale`
    pub fn advance(&self, scale: usize) -> usize {
        (self.width + 1) * scale
    }

    /// Ink width of `text` at `scale` (no trailing letter gap)
    pub fn text_width(&self, text: &str, scale: usize) -> usize {
        let count = text.chars().count();
        if count == 0 {
            return 0;
        }
        count * self.advance(scale) - scale
    }

    /// Draw `text` with its top-left corner at `(x, y)`, each glyph pixel
    /// scaled to a `scale` x `scale` block
    pub fn draw_text(&self, img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: usize) {
        for (char_idx, ch) in text.chars().enumerate() {
            let Some(glyph) = self.glyph(ch) else {
                continue;
            };
            let char_x = x + (char_idx * self.advance(scale)) as i32;

            for gy in 0..self.height {
                for gx in 0..self.width {
                    if !glyph[gy * self.width + gx] {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = char_x + (gx * scale + sx) as i32;
                            let py = y + (gy * scale + sy) as i32;
                            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                                img.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn parse_fd(data: &str) -> Result<Self> {
        let lines: Vec<&str> = data.lines().collect();
        let mut height = 7;
        let mut width = 5;
        let mut char_start_idx = lines.len();

        let header_value = |line: &str, key: &str| -> Result<usize> {
            line.split_whitespace()
                .nth(1)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| ArtError::Font(format!("Invalid {}: '{}'", key, line)))
        };

        for (idx, line) in lines.iter().enumerate() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if line.starts_with("height") {
                height = header_value(line, "height")?;
            } else if line.starts_with("width") {
                width = header_value(line, "width")?;
            } else if line.starts_with("char") {
                char_start_idx = idx;
                break;
            }
        }

        if width == 0 || height == 0 {
            return Err(ArtError::Font(format!("Invalid glyph cell {}x{}", width, height)));
        }

        let mut glyphs = vec![None; GLYPH_SLOTS];
        let mut current_char: Option<usize> = None;
        let mut bitmap_lines: Vec<&str> = Vec::new();

        let mut flush = |code: Option<usize>, rows: &[&str]| {
            if let Some(code) = code {
                if code < GLYPH_SLOTS && rows.len() == height {
                    glyphs[code] = Some(Self::parse_bitmap(rows, width, height));
                }
            }
        };

        for line in &lines[char_start_idx..] {
            // Strip trailing comments such as `char 65  # A`
            let line = line.split(" #").next().unwrap_or("").trim();

            if line.starts_with("char") {
                flush(current_char, &bitmap_lines);
                current_char = line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
                bitmap_lines.clear();
            } else if !line.is_empty() && !line.starts_with('#') && line.chars().all(|c| c == 'x' || c == '.') {
                bitmap_lines.push(line);
            }
        }
        flush(current_char, &bitmap_lines);

        Ok(Self {
            width,
            height,
            glyphs,
        })
    }

    fn parse_bitmap(lines: &[&str], char_width: usize, height: usize) -> Vec<bool> {
        let mut bitmap = Vec::with_capacity(char_width * height);

        for line in lines {
            let row: Vec<bool> = line.chars().take(char_width).map(|c| c == 'x').collect();
            let pad = char_width - row.len();
            bitmap.extend(row);
            bitmap.extend(std::iter::repeat(false).take(pad));
        }

        bitmap.resize(char_width * height, false);
        bitmap
    }

    /// Hollow boxes for every printable character
    fn fallback_font() -> Self {
        let width = 5;
        let height = 7;
        let glyphs = (0..GLYPH_SLOTS)
            .map(|code| {
                let printable = (33..127).contains(&code);
                printable.then(|| {
                    (0..width * height)
                        .map(|i| {
                            let (x, y) = (i % width, i / width);
                            x == 0 || x == width - 1 || y == 0 || y == height - 1
                        })
                        .collect::<Vec<bool>>()
                })
            })
            .collect();

        Self {
            width,
            height,
            glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# test font\nheight 3\nwidth 3\n\nchar 65  # A\n.x.\nxxx\nx.x\n\nchar 66\nxx.\nxxx\nxx.\n";

    #[test]
    fn test_parse_fd() {
        let font = BitmapFont::parse_fd(SAMPLE).unwrap();
        assert_eq!((font.width(), font.height()), (3, 3));
        assert_eq!(font.glyph_count(), 2);
        let a = font.glyph('A').unwrap();
        assert_eq!(a, &[false, true, false, true, true, true, true, false, true]);
    }

    #[test]
    fn test_lowercase_uses_capital_glyph() {
        let font = BitmapFont::parse_fd(SAMPLE).unwrap();
        assert_eq!(font.glyph('a'), font.glyph('A'));
        assert!(font.glyph('z').is_none());
    }

    #[test]
    fn test_incomplete_glyph_is_skipped() {
        let font = BitmapFont::parse_fd("height 2\nwidth 2\nchar 65\nxx\n").unwrap();
        assert!(font.glyph('A').is_none());
    }

    #[test]
    fn test_bad_header_is_an_error() {
        assert!(BitmapFont::parse_fd("height tall\nchar 65\n").is_err());
    }

    #[test]
    fn test_text_width() {
        let font = BitmapFont::parse_fd(SAMPLE).unwrap();
        // 2 glyphs * (3 + 1) * 2 - 2
        assert_eq!(font.text_width("AB", 2), 14);
        assert_eq!(font.text_width("", 2), 0);
    }

    #[test]
    fn test_embedded_font_covers_terrain_labels() {
        let font = BitmapFont::load_embedded();
        assert_eq!((font.width(), font.height()), (5, 7));
        for label in ["Deep Water", "Shallow Water", "Sand", "Grass", "Dirt", "Stone", "Snow", "Forest"] {
            for ch in label.chars().filter(|c| !c.is_whitespace()) {
                assert!(font.glyph(ch).is_some(), "missing glyph for {:?}", ch);
            }
        }
    }

    #[test]
    fn test_draw_text_scales_pixels() {
        let font = BitmapFont::parse_fd(SAMPLE).unwrap();
        let mut img = RgbImage::new(8, 8);
        let white = Rgb([255, 255, 255]);
        font.draw_text(&mut img, 0, 0, "A", white, 2);
        // Top-middle pixel of 'A' becomes a 2x2 block at (2..4, 0..2)
        assert_eq!(*img.get_pixel(2, 0), white);
        assert_eq!(*img.get_pixel(3, 1), white);
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
