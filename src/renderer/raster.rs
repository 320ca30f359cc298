use image::{Rgba, RgbaImage};

/// Write a pixel, dropping anything outside the image.
///
/// Pixels are replaced, not blended: a translucent stroke leaves a
/// translucent pixel behind.
pub fn put_pixel_clipped(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// 1-pixel Bresenham line, both endpoints included
pub fn draw_line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel_clipped(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Stroke the closed outline of a polygon
pub fn stroke_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_line(img, start, end, color);
    }
}

/// Scanline fill of a simple polygon, boundary included
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

    for y in min_y..=max_y {
        crossings.clear();
        let scan = y as f64;

        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            if y0 == y1 {
                continue;
            }
            // Half-open in y so shared vertices are counted once
            let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (scan - y0 as f64) / (y1 - y0) as f64;
            crossings.push(x0 as f64 + t * (x1 - x0) as f64);
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for span in crossings.chunks_exact(2) {
            let start = span[0].ceil() as i32;
            let end = span[1].floor() as i32;
            for x in start..=end {
                put_pixel_clipped(img, x, y, color);
            }
        }
    }

    // Edges (including the bottom vertex row the half-open rule skips)
    stroke_polygon(img, points, color);
}
