//! Packed 32-bit colors
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

/// A color packed as `0x00RRGGBB`.
///
/// This is the representation used at the API boundary. The framebuffer
/// converts it into the native pixel word once per drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const BLUE: Color = Color(0x0000FF);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const CYAN: Color = Color(0x00FFFF);
    pub const MAGENTA: Color = Color(0xFF00FF);
    pub const GRAY: Color = Color(0x808080);
    pub const DARK_GRAY: Color = Color(0x404040);
    pub const LIGHT_GRAY: Color = Color(0xC0C0C0);
    pub const AMBER: Color = Color(0xFFB000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build from a `0xRRGGBB` literal; the top byte is discarded.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    pub const fn to_hex(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r(), self.g(), self.b())
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::new(c.r(), c.g(), c.b())
    }
}

impl From<Color> for Rgb888 {
    fn from(c: Color) -> Self {
        c.to_rgb888()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_hex(), 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_hex(0xFF12_3456), c);
    }

    #[test]
    fn test_rgb888_conversion() {
        let c = Color::AMBER;
        let rgb: Rgb888 = c.into();
        assert_eq!(Color::from(rgb), c);
    }
}
