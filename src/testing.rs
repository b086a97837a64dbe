//! In-memory stand-ins for the hardware layer and the serial port.

use crate::error::DisplayError;
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::hal::{DisplayHal, ModeInfo, PixelFormat, SerialSink};

pub(crate) struct MockHal<'a> {
    buffer: Option<&'a mut [u32]>,
    width: usize,
    height: usize,
    stride: usize,
    virtual_height: usize,
    format: PixelFormat,
    accept_scroll: bool,
    /// Every value handed to `set_scroll_offset`, accepted or not.
    pub offset_writes: Vec<usize>,
}

impl<'a> MockHal<'a> {
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        Self {
            buffer: Some(buffer),
            width,
            height,
            stride: width,
            virtual_height: height,
            format: PixelFormat::Bgrx,
            accept_scroll: true,
            offset_writes: Vec::new(),
        }
    }

    /// A mock that sets a mode but never produces a buffer.
    pub fn without_buffer(width: usize, height: usize) -> Self {
        Self {
            buffer: None,
            width,
            height,
            stride: width,
            virtual_height: height,
            format: PixelFormat::Bgrx,
            accept_scroll: true,
            offset_writes: Vec::new(),
        }
    }

    pub fn with_virtual_height(mut self, virtual_height: usize) -> Self {
        self.virtual_height = virtual_height;
        self
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn rejecting_scroll(mut self) -> Self {
        self.accept_scroll = false;
        self
    }
}

impl<'a> DisplayHal<'a> for MockHal<'a> {
    fn set_mode(&mut self, _width: usize, _height: usize) -> Result<ModeInfo<'a>, DisplayError> {
        let buffer = self.buffer.take().ok_or(DisplayError::NoBuffer)?;
        Ok(ModeInfo {
            buffer,
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
        })
    }

    fn virtual_height(&self) -> usize {
        self.virtual_height
    }

    fn set_scroll_offset(&mut self, y: usize) -> Result<(), DisplayError> {
        self.offset_writes.push(y);
        if self.accept_scroll {
            Ok(())
        } else {
            Err(DisplayError::ScrollUnsupported)
        }
    }
}

#[derive(Default)]
pub(crate) struct MockSerial {
    pub bytes: Vec<u8>,
}

impl SerialSink for MockSerial {
    fn write_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
}

/// Backing store for a `cols` x `rows` grid with `extra_rows` cell rows of
/// virtual framebuffer below it.
pub(crate) fn backing_store(cols: usize, rows: usize, extra_rows: usize) -> Vec<u32> {
    vec![0; cols * GLYPH_WIDTH * (rows + extra_rows) * GLYPH_HEIGHT]
}
