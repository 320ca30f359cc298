use artgen::font_tools::LabelFont;
use artgen::preview::{self, Layout, SCALED_TILE};
use artgen::tileset::{self, Terrain};
use artgen::ArtError;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("artgen-preview-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn font() -> LabelFont {
    LabelFont::embedded(14.0)
}

fn assert_tiles_enlarged(sheet: &RgbImage, atlas: &RgbImage, layout: Layout) {
    for i in 0..Terrain::ALL.len() {
        let tile = tileset::tile_from_atlas(atlas, i).unwrap();
        let (ox, oy) = layout.tile_position(i);
        for y in 0..SCALED_TILE {
            for x in 0..SCALED_TILE {
                assert_eq!(
                    sheet.get_pixel(ox + x, oy + y),
                    tile.get_pixel(x / 4, y / 4),
                    "{:?} tile {} at ({}, {})",
                    layout,
                    i,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn sheets_reproduce_every_tile_at_4x() {
    let atlas = tileset::build_atlas();
    for layout in [Layout::Column, Layout::Grid] {
        let sheet = preview::render_sheet(&atlas, layout, &font()).unwrap();
        assert_eq!(sheet.dimensions(), layout.sheet_size());
        assert_tiles_enlarged(&sheet, &atlas, layout);
    }
}

#[test]
fn labels_are_drawn_below_each_tile() {
    let atlas = tileset::build_atlas();
    let sheet = preview::render_sheet(&atlas, Layout::Grid, &font()).unwrap();

    for i in 0..Terrain::ALL.len() {
        let (ox, oy) = Layout::Grid.tile_position(i);
        let band_top = oy + SCALED_TILE;
        let has_ink = (band_top..band_top + 30)
            .any(|y| (ox..ox + SCALED_TILE).any(|x| *sheet.get_pixel(x, y) == Rgb([255, 255, 255])));
        assert!(has_ink, "tile {} has no label", i);
    }
}

#[test]
fn background_fills_the_gutters() {
    let atlas = tileset::build_atlas();
    let sheet = preview::render_sheet(&atlas, Layout::Column, &font()).unwrap();
    assert_eq!(*sheet.get_pixel(0, 0), Rgb([40, 40, 40]));
    assert_eq!(*sheet.get_pixel(147, 1353), Rgb([40, 40, 40]));
}

#[test]
fn generate_writes_both_sheets() {
    let dir = scratch_dir("e2e");
    let source = dir.join("tileset_2d.png");
    tileset::generate(&source).unwrap();

    let column_out = dir.join("tileset_preview.png");
    let grid_out = dir.join("tileset_grid_preview.png");
    let written = preview::generate(&source, &column_out, &grid_out, &font()).unwrap();
    assert_eq!(written.column, column_out);
    assert_eq!(written.grid, grid_out);

    let atlas = image::open(&source).unwrap().to_rgb8();
    let column = image::open(&column_out).unwrap().to_rgb8();
    let grid = image::open(&grid_out).unwrap().to_rgb8();
    assert_eq!(column.dimensions(), (148, 1354));
    assert_eq!(grid.dimensions(), (562, 346));
    assert_tiles_enlarged(&grid, &atlas, Layout::Grid);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_source_is_reported() {
    let dir = scratch_dir("missing");
    let err = preview::generate(
        &dir.join("tileset_2d.png"),
        &dir.join("column.png"),
        &dir.join("grid.png"),
        &font(),
    )
    .unwrap_err();
    assert!(matches!(err, ArtError::MissingSource(_)));
    assert!(!dir.join("column.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn undersized_atlas_is_rejected() {
    let dir = scratch_dir("small");
    let source = dir.join("tileset_2d.png");
    RgbImage::new(128, 32).save(&source).unwrap();

    let err = preview::load_atlas(&source).unwrap_err();
    assert!(matches!(err, ArtError::AtlasTooSmall { .. }));
    let _ = std::fs::remove_dir_all(&dir);
}
