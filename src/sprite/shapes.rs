//! Hand-placed pixel coordinates for each region of the player sprite.

pub type Point = (i32, i32);

pub const CAPE: &[Point] = &[
    (14, 18), (15, 18), (16, 18), (17, 18),
    (13, 19), (14, 19), (15, 19), (16, 19), (17, 19), (18, 19),
    (12, 20), (13, 20), (14, 20), (17, 20), (18, 20), (19, 20),
    (13, 21), (14, 21), (17, 21), (18, 21),
];

/// Torso rectangle, `[x0, x1) x [y0, y1)`
pub const TORSO: (Point, Point) = ((13, 15), (19, 19));

/// Corners left unpainted to round the torso
pub const TORSO_CORNERS: &[Point] = &[(13, 15), (18, 15), (13, 18), (18, 18)];

pub const CHEST_TRIM: &[Point] = &[
    (14, 15), (15, 15), (16, 15), (17, 15),
    (15, 16), (16, 16),
];

/// Leading pixels of each arm are armored, the rest are bare hand
pub const ARMORED_ARM_PIXELS: usize = 3;

pub const LEFT_ARM: &[Point] = &[(11, 16), (12, 16), (12, 17), (11, 17), (10, 17)];

pub const RIGHT_ARM: &[Point] = &[(19, 16), (20, 16), (19, 17), (20, 17), (21, 17)];

pub const LEFT_LEG: &[Point] = &[(14, 19), (14, 20)];
pub const LEFT_BOOT: &[Point] = &[(13, 21), (14, 21), (13, 22), (14, 22)];
pub const RIGHT_LEG: &[Point] = &[(17, 19), (17, 20)];
pub const RIGHT_BOOT: &[Point] = &[(17, 21), (18, 21), (17, 22), (18, 22)];

/// Face rectangle, `[x0, x1) x [y0, y1)`
pub const HEAD: (Point, Point) = ((14, 11), (18, 15));

pub const HAIR: &[Point] = &[
    (13, 10), (14, 10), (15, 10), (16, 10), (17, 10), (18, 10),
    (13, 11), (18, 11),
    (13, 12), (18, 12),
    (13, 13), (18, 13),
];

pub const EYES: &[Point] = &[(14, 12), (17, 12)];

/// Nose and mouth
pub const FACE_SHADOW: &[Point] = &[(15, 13), (16, 13)];

pub const HELMET_TRIM: &[Point] = &[(14, 9), (15, 9), (16, 9), (17, 9)];

/// Diagonal blade plus its wider base
pub const BLADE: &[Point] = &[(22, 15), (23, 14), (24, 13), (25, 12), (26, 11), (22, 16)];

pub const HANDLE: &[Point] = &[(21, 16), (21, 17)];
pub const CROSS_GUARD: &[Point] = &[(22, 17)];
