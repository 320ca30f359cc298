use artgen::renderer::{upscale_nearest, Canvas};
use artgen::sprite::{self, apply_outline, paint_layers, preview_path, render_sprite, shapes, Layer, Palette};
use image::Rgba;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("artgen-sprite-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn neighbors(x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
    (-1..=1)
        .flat_map(move |dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
        .filter(move |&p| p != (x, y))
}

// ── Determinism ──────────────────────────────────────────────────────────

#[test]
fn sprite_is_32x32_and_deterministic() {
    let a = render_sprite();
    let b = render_sprite();
    assert_eq!(a.dimensions(), (32, 32));
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn background_stays_transparent() {
    let img = render_sprite();
    assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*img.get_pixel(31, 31), Rgba([0, 0, 0, 0]));
    assert_eq!(*img.get_pixel(5, 16), Rgba([0, 0, 0, 0]));
}

// ── Shape regions ────────────────────────────────────────────────────────

#[test]
fn every_shape_table_lies_on_the_canvas() {
    let tables: [&[shapes::Point]; 16] = [
        shapes::CAPE,
        shapes::TORSO_CORNERS,
        shapes::CHEST_TRIM,
        shapes::LEFT_ARM,
        shapes::RIGHT_ARM,
        shapes::LEFT_LEG,
        shapes::LEFT_BOOT,
        shapes::RIGHT_LEG,
        shapes::RIGHT_BOOT,
        shapes::HAIR,
        shapes::EYES,
        shapes::FACE_SHADOW,
        shapes::HELMET_TRIM,
        shapes::BLADE,
        shapes::HANDLE,
        shapes::CROSS_GUARD,
    ];
    for table in tables {
        assert!(table.iter().all(|&(x, y)| (0..32).contains(&x) && (0..32).contains(&y)));
    }
}

#[test]
fn region_sizes() {
    assert_eq!(shapes::CAPE.len(), 20);
    assert_eq!(shapes::CHEST_TRIM.len(), 6);
    assert_eq!(shapes::HAIR.len(), 12);
    assert_eq!(shapes::BLADE.len(), 6);
    let palette = Palette::default();
    assert_eq!(Layer::Head.pixels(&palette).len(), 16);
    assert_eq!(Layer::Legs.pixels(&palette).len(), 12);
    assert_eq!(Layer::Handle.pixels(&palette).len(), 3);
}

#[test]
fn weapon_is_painted_last() {
    let palette = Palette::default();
    let canvas = paint_layers(&palette);
    for &(x, y) in shapes::BLADE {
        assert_eq!(canvas.get_pixel(x, y), Some(palette.weapon));
    }
    assert_eq!(canvas.get_pixel(22, 17), Some(palette.weapon));
    assert_eq!(canvas.get_pixel(21, 16), Some(palette.weapon_handle));
}

#[test]
fn cape_shows_only_where_nothing_covers_it() {
    let palette = Palette::default();
    let canvas = paint_layers(&palette);
    // (12, 20) and (19, 20) are only touched by the cape
    assert_eq!(canvas.get_pixel(12, 20), Some(palette.cape));
    assert_eq!(canvas.get_pixel(19, 20), Some(palette.cape));
    // Boots cover the lower cape
    assert_eq!(canvas.get_pixel(13, 21), Some(palette.boot));
}

// ── Outline pass ─────────────────────────────────────────────────────────

#[test]
fn outline_rule_holds_for_every_pixel() {
    let palette = Palette::default();
    let before = paint_layers(&palette);
    let mut after = before.clone();
    apply_outline(&mut after);

    for y in 0..32 {
        for x in 0..32 {
            let Rgba([r, g, b, a]) = before.get_pixel(x, y).unwrap();
            let edge = a > 128
                && neighbors(x, y).any(|(nx, ny)| before.get_pixel(nx, ny).is_some_and(|n| n[3] < 10));
            let expected = if edge {
                Rgba([
                    (r as f64 * 0.3).floor() as u8,
                    (g as f64 * 0.3).floor() as u8,
                    (b as f64 * 0.3).floor() as u8,
                    255,
                ])
            } else {
                Rgba([r, g, b, a])
            };
            assert_eq!(after.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn adjacent_edge_pixels_are_each_darkened_once() {
    let mut canvas = Canvas::new(4, 3);
    let c = Rgba([200, 100, 50, 255]);
    canvas.set_pixel(1, 1, c);
    canvas.set_pixel(2, 1, c);
    apply_outline(&mut canvas);
    assert_eq!(canvas.get_pixel(1, 1), Some(Rgba([60, 30, 15, 255])));
    assert_eq!(canvas.get_pixel(2, 1), Some(Rgba([60, 30, 15, 255])));
}

#[test]
fn eyes_are_interior_and_keep_their_color() {
    let palette = Palette::default();
    let img = render_sprite();
    for &(x, y) in shapes::EYES {
        assert_eq!(*img.get_pixel(x as u32, y as u32), palette.eye);
    }
}

// ── Preview ──────────────────────────────────────────────────────────────

#[test]
fn preview_is_exact_4x_block_replication() {
    let img = render_sprite();
    let large = upscale_nearest(&img, sprite::PREVIEW_SCALE);
    assert_eq!(large.dimensions(), (128, 128));
    for y in 0..32 {
        for x in 0..32 {
            for dy in 0..4 {
                for dx in 0..4 {
                    assert_eq!(large.get_pixel(4 * x + dx, 4 * y + dy), img.get_pixel(x, y));
                }
            }
        }
    }
}

// ── End to end ───────────────────────────────────────────────────────────

#[test]
fn generate_writes_sprite_and_preview() {
    let dir = scratch_dir("e2e");
    let output = dir.join("player_character.png");

    let written = sprite::generate(&output).unwrap();
    assert_eq!(written.preview, dir.join("player_character_preview.png"));
    assert_eq!(preview_path(&output), written.preview);

    let sprite_img = image::open(&written.sprite).unwrap().to_rgba8();
    let preview_img = image::open(&written.preview).unwrap().to_rgba8();
    assert_eq!(sprite_img.dimensions(), (32, 32));
    assert_eq!(preview_img.dimensions(), (128, 128));
    assert_eq!(sprite_img, render_sprite());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn generate_does_not_create_missing_directories() {
    let dir = scratch_dir("nodir");
    let output = dir.join("missing/sub/player.png");
    assert!(sprite::generate(&output).is_err());
    assert!(!dir.join("missing").exists());
    let _ = std::fs::remove_dir_all(&dir);
}
