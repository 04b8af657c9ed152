use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// The built-in qualitative palette installed by color sources constructed
/// without explicit colors.
pub const DEFAULT_COLORS: [Color; 10] = [
    Color::rgb(0x1F, 0x77, 0xB4),
    Color::rgb(0xFF, 0x7F, 0x0E),
    Color::rgb(0x2C, 0xA0, 0x2C),
    Color::rgb(0xD6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xBD),
    Color::rgb(0x8C, 0x56, 0x4B),
    Color::rgb(0xE3, 0x77, 0xC2),
    Color::rgb(0x7F, 0x7F, 0x7F),
    Color::rgb(0xBC, 0xBD, 0x22),
    Color::rgb(0x17, 0xBE, 0xCF),
];
