use image::{Rgba, RgbaImage};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Owned RGBA pixel grid used while painting a sprite.
///
/// Writes outside the grid are silently dropped so shape tables can be
/// painted without per-pixel bounds checks at the call site.
#[derive(Clone)]
pub struct Canvas {
    data: Vec<Rgba<u8>>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![TRANSPARENT; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        self.index(x, y).map(|idx| self.data[idx])
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        for x in x0..x1 {
            for y in y0..y1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        let width = self.width;
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.data[y as usize * width + x as usize]
        })
    }
}

impl From<&RgbaImage> for Canvas {
    fn from(img: &RgbaImage) -> Self {
        Self {
            data: img.pixels().copied().collect(),
            width: img.width() as usize,
            height: img.height() as usize,
        }
    }
}
