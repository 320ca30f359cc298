use rust_embed::RustEmbed;

/// Bitmap fonts compiled into the binary
#[derive(RustEmbed)]
#[folder = "assets/fonts/"]
pub struct EmbeddedFonts;

pub const DEFAULT_LABEL_FONT: &str = "label.fd";

pub fn font_source(name: &str) -> Option<String> {
    EmbeddedFonts::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

pub fn font_names() -> Vec<String> {
    EmbeddedFonts::iter().map(|name| name.into_owned()).collect()
}
