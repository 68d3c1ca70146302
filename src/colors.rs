//! Color constants and conversions for the clock face.
//!
//! # 24-bit Style Colors
//!
//! Style colors arrive from settings as plain `0xRRGGBB` integers (the upper
//! byte, if any, is ignored and the color is always opaque). They are kept as
//! [`Rgb888`] inside the engine and only narrowed to the panel's native format
//! (e.g. RGB565) by the render adapter, via the `From<Rgb888>` conversions
//! that `embedded_graphics` provides for every RGB color type.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default for both hands and the date label.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Default background, and tail track default on monochrome panels.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light gray (`0xAAAAAA`). Tail track default on color panels.
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(0xAA, 0xAA, 0xAA);

/// Whether the panel can show colors beyond black and white.
///
/// Only affects which defaults are picked; colors supplied by the user are
/// passed through unchanged either way.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Palette {
    /// Full color panel.
    #[default]
    Color,
    /// Black-and-white panel.
    Monochrome,
}

/// Build a color from a `0xRRGGBB` integer, ignoring anything above bit 23.
#[inline]
pub const fn from_hex(hex: u32) -> Rgb888 {
    Rgb888::new(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
}

/// Pack a color back into `0xRRGGBB`, as [`StyleRecord::get`](crate::style::StyleRecord::get) reports it.
#[inline]
pub fn to_hex(color: Rgb888) -> u32 { (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b()) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_channels() {
        let c = from_hex(0x12_34_56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_from_hex_ignores_alpha_byte() {
        assert_eq!(from_hex(0xFF_AA_AA_AA), LIGHT_GRAY);
        assert_eq!(from_hex(0x00_FF_FF_FF), WHITE);
    }

    #[test]
    fn test_hex_roundtrip_of_defaults() {
        assert_eq!(to_hex(LIGHT_GRAY), 0xAAAAAA);
        assert_eq!(to_hex(BLACK), 0);
    }
}
