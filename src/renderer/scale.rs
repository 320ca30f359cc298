use image::{ImageBuffer, Pixel};

/// Integer nearest-neighbor upscale: every source pixel becomes a
/// `factor` x `factor` block of the same color.
pub fn upscale_nearest<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>, factor: u32) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let factor = factor.max(1);
    ImageBuffer::from_fn(img.width() * factor, img.height() * factor, |x, y| {
        *img.get_pixel(x / factor, y / factor)
    })
}
