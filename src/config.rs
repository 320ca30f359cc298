use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "artgen.yaml";

/// Output locations and label font for every generator.
///
/// Every field is optional in the YAML file; missing fields keep the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// 2D terrain atlas (also the preview generator's input)
    pub tileset_output: PathBuf,
    pub isometric_output: PathBuf,
    /// Player sprite; the preview lands next to it as `<name>_preview.png`
    pub sprite_output: PathBuf,
    pub preview_source: PathBuf,
    pub preview_output: PathBuf,
    pub grid_preview_output: PathBuf,
    pub label_font: Option<PathBuf>,
    pub label_font_size: f32,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            tileset_output: PathBuf::from("assets/textures/terrain/tileset_2d.png"),
            isometric_output: PathBuf::from("assets/textures/terrain/isometric_tileset.png"),
            sprite_output: PathBuf::from("assets/sprites/player_character.png"),
            preview_source: PathBuf::from("assets/textures/terrain/tileset_2d.png"),
            preview_output: PathBuf::from("docs/tileset_preview.png"),
            grid_preview_output: PathBuf::from("docs/tileset_grid_preview.png"),
            label_font: Some(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")),
            label_font_size: 14.0,
        }
    }
}

impl ArtConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Resolve configuration: an explicit file must exist; otherwise the
    /// working directory and the user config directory are searched, and
    /// the defaults are used when neither has a config file
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "loading config");
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "artgen") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths
    }
}
