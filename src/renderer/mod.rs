mod canvas;
mod colors;
mod raster;
mod scale;

pub use canvas::{Canvas, TRANSPARENT};
pub use colors::{channel, darken, lighten, modulate, scale};
pub use raster::{draw_line, fill_polygon, put_pixel_clipped, stroke_polygon};
pub use scale::upscale_nearest;

use crate::error::Result;
use image::{EncodableLayout, ImageBuffer, Pixel, PixelWithColorType};
use std::path::Path;
use tracing::info;

/// Encode an image to disk; the format follows the file extension
pub fn save_image<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>, path: &Path) -> Result<()>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    img.save(path)?;
    info!(path = %path.display(), width = img.width(), height = img.height(), "wrote image");
    Ok(())
}
