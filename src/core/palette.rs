use super::Color;

/// Default series fill colors, assigned in order.
pub const DEFAULT_FILLS: [Color; 8] = [
    Color::from_rgb8(0xf3, 0x62, 0x2d),
    Color::from_rgb8(0xfb, 0xa7, 0x1b),
    Color::from_rgb8(0x57, 0xb7, 0x57),
    Color::from_rgb8(0x41, 0xa9, 0xc9),
    Color::from_rgb8(0x42, 0x58, 0xc9),
    Color::from_rgb8(0x9a, 0x42, 0xc8),
    Color::from_rgb8(0xc8, 0x41, 0x64),
    Color::from_rgb8(0x88, 0x88, 0x88),
];

/// Darker companions of [`DEFAULT_FILLS`], used for outlines and callouts.
pub const DEFAULT_STROKES: [Color; 8] = [
    Color::from_rgb8(0xaa, 0x45, 0x20),
    Color::from_rgb8(0xb0, 0x75, 0x13),
    Color::from_rgb8(0x3d, 0x80, 0x3d),
    Color::from_rgb8(0x2d, 0x76, 0x8d),
    Color::from_rgb8(0x2e, 0x3e, 0x8d),
    Color::from_rgb8(0x6c, 0x2e, 0x8c),
    Color::from_rgb8(0x8c, 0x2d, 0x46),
    Color::from_rgb8(0x5f, 0x5f, 0x5f),
];

#[must_use]
pub fn default_fills() -> Vec<Color> {
    DEFAULT_FILLS.to_vec()
}

#[must_use]
pub fn default_strokes() -> Vec<Color> {
    DEFAULT_STROKES.to_vec()
}
