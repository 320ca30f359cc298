use image::Rgb;

/// Truncate toward zero and clamp into the 8-bit channel range.
///
/// Noise terms can push a channel below 0 or above 255; the value is
/// always clamped rather than wrapped.
pub fn channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}

/// `base + amplitude * t` for each channel
pub fn modulate(base: [u8; 3], amplitude: [f64; 3], t: f64) -> Rgb<u8> {
    Rgb([
        channel(base[0] as f64 + t * amplitude[0]),
        channel(base[1] as f64 + t * amplitude[1]),
        channel(base[2] as f64 + t * amplitude[2]),
    ])
}

/// Multiply each channel by `factor`, truncating
pub fn scale(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    let Rgb([r, g, b]) = color;
    Rgb([
        channel(r as f64 * factor),
        channel(g as f64 * factor),
        channel(b as f64 * factor),
    ])
}

/// Move each channel toward white: `c + (255 - c) * factor`
pub fn lighten(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    let Rgb(c) = color;
    Rgb(c.map(|v| channel(v as f64 + (255 - v) as f64 * factor)))
}

/// Move each channel toward black: `c * (1 - factor)`
pub fn darken(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    scale(color, 1.0 - factor)
}
