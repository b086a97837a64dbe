//! [`DisplayHal`] over the framebuffer the bootloader already set up.
//!
//! The bootloader picks the mode, so `set_mode` hands back whatever it
//! found. There is no virtual framebuffer behind it: the only scroll offset
//! it accepts is 0 and the console ends up scrolling in software.

use bootloader_api::info::{FrameBuffer, PixelFormat as BootPixelFormat};
use fbconsole::{DisplayError, DisplayHal, ModeInfo, PixelFormat};
use log::debug;

pub struct BootDisplay {
    fb: Option<&'static mut FrameBuffer>,
    height: usize,
}

impl BootDisplay {
    pub fn new(fb: Option<&'static mut FrameBuffer>) -> Self {
        let height = fb.as_ref().map_or(0, |fb| fb.info().height);
        Self { fb, height }
    }
}

impl DisplayHal<'static> for BootDisplay {
    fn set_mode(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<ModeInfo<'static>, DisplayError> {
        let fb = self.fb.take().ok_or(DisplayError::NoBuffer)?;
        let info = fb.info();
        if (info.width, info.height) != (width, height) {
            debug!(
                "boot display: asked for {}x{}, bootloader mode is {}x{}",
                width, height, info.width, info.height
            );
        }

        let format = match info.pixel_format {
            BootPixelFormat::Bgr => PixelFormat::Bgrx,
            BootPixelFormat::Rgb => PixelFormat::Rgbx,
            _ => return Err(DisplayError::UnsupportedFormat("not an RGB layout")),
        };
        if info.bytes_per_pixel != 4 {
            return Err(DisplayError::UnsupportedFormat("pixels are not 4 bytes wide"));
        }

        // SAFETY: any bit pattern is a valid u32.
        let (head, pixels, _) = unsafe { fb.buffer_mut().align_to_mut::<u32>() };
        if !head.is_empty() {
            return Err(DisplayError::UnsupportedFormat("buffer not 4-byte aligned"));
        }

        Ok(ModeInfo {
            buffer: pixels,
            width: info.width,
            height: info.height,
            stride: info.stride,
            format,
        })
    }

    fn virtual_height(&self) -> usize {
        self.height
    }

    fn set_scroll_offset(&mut self, y: usize) -> Result<(), DisplayError> {
        if y == 0 {
            Ok(())
        } else {
            Err(DisplayError::ScrollUnsupported)
        }
    }
}
