//! # Hardware Seams
//!
//! The console consumes two collaborators it does not implement:
//!
//! - [`DisplayHal`]: platform mode-setting plus the virtual-framebuffer
//!   scroll register.
//! - [`SerialSink`]: the raw byte output used when there is no display.
//!
//! The kernel binary backs these with the bootloader framebuffer and COM1;
//! tests back them with in-memory mocks.

use crate::error::DisplayError;

/// In-memory byte order of one 32-bit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Blue, green, red, padding. A little-endian `u32` reads `0x00RRGGBB`.
    Bgrx,
    /// Red, green, blue, padding. A little-endian `u32` reads `0x00BBGGRR`.
    Rgbx,
}

/// Result of a successful mode-set.
pub struct ModeInfo<'a> {
    /// The whole backing store, `stride * buffer_height` pixels or more.
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
    /// Distance between rows, in pixels.
    pub stride: usize,
    pub format: PixelFormat,
}

pub trait DisplayHal<'a> {
    /// Ask for a `width` x `height` mode. The hardware may return another one.
    fn set_mode(&mut self, width: usize, height: usize) -> Result<ModeInfo<'a>, DisplayError>;

    /// Total addressable rows in the backing store. Equal to the visible
    /// height when hardware scrolling is not supported.
    fn virtual_height(&self) -> usize;

    /// Point the top of the visible window at backing-store row `y`.
    fn set_scroll_offset(&mut self, y: usize) -> Result<(), DisplayError>;
}

pub trait SerialSink {
    fn write_byte(&mut self, byte: u8);
}

impl<T: SerialSink + ?Sized> SerialSink for &mut T {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }
}
