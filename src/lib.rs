//! Procedural placeholder art generators.
//!
//! The terrain atlas, the isometric block tileset and the player sprite are
//! pure functions of fixed constants. The preview sheets are built from an
//! atlas already on disk.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod font_tools;
pub mod isometric;
pub mod preview;
pub mod renderer;
pub mod sprite;
pub mod tileset;

pub use config::ArtConfig;
pub use error::{ArtError, Result};
