//! Linear framebuffer writer
use crate::error::DisplayError;
use crate::framebuffer::color::Color;
use crate::glyph::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::hal::{DisplayHal, ModeInfo, PixelFormat};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
    Pixel,
};
use log::{debug, warn};

pub struct Framebuffer<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    stride: usize,
    buffer_height: usize,
    format: PixelFormat,
}

impl<'a> Framebuffer<'a> {
    /// Set a mode through `hal` and zero the whole backing store.
    pub fn init<H: DisplayHal<'a>>(
        hal: &mut H,
        width: usize,
        height: usize,
    ) -> Result<Self, DisplayError> {
        let mode = hal.set_mode(width, height)?;
        let mut fb = Self::from_mode(mode, hal.virtual_height())?;

        let len = fb.stride * fb.buffer_height;
        fb.buffer[..len].fill(0);

        debug!(
            "framebuffer: {}x{} stride {} buffer_height {} {:?}",
            fb.width, fb.height, fb.stride, fb.buffer_height, fb.format
        );
        Ok(fb)
    }

    /// Wrap an already-negotiated mode without touching its contents.
    pub fn from_mode(mode: ModeInfo<'a>, virtual_height: usize) -> Result<Self, DisplayError> {
        let ModeInfo { buffer, width, height, stride, format } = mode;

        if buffer.is_empty() || width == 0 || height == 0 {
            return Err(DisplayError::NoBuffer);
        }
        if stride < width {
            return Err(DisplayError::UnsupportedFormat("stride shorter than width"));
        }

        let needed = stride * height;
        if buffer.len() < needed {
            return Err(DisplayError::BufferTooSmall { needed, actual: buffer.len() });
        }

        let mut buffer_height = virtual_height.max(height);
        let addressable = buffer.len() / stride;
        if buffer_height > addressable {
            warn!(
                "framebuffer: virtual height {} exceeds buffer, using {}",
                buffer_height, addressable
            );
            buffer_height = addressable;
        }

        Ok(Self { buffer, width, height, stride, buffer_height, format })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels between the starts of two rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Addressable rows, `>= height()`.
    pub fn buffer_height(&self) -> usize {
        self.buffer_height
    }

    /// Native pixel word for `color`.
    #[inline(always)]
    pub fn pack(&self, color: Color) -> u32 {
        let hex = color.to_hex();
        match self.format {
            PixelFormat::Bgrx => hex,
            PixelFormat::Rgbx => (hex & 0x00FF00) | ((hex >> 16) & 0xFF) | ((hex & 0xFF) << 16),
        }
    }

    #[inline(always)]
    fn unpack(&self, raw: u32) -> Color {
        match self.format {
            PixelFormat::Bgrx => Color::from_hex(raw),
            PixelFormat::Rgbx => Color::new(raw as u8, (raw >> 8) as u8, (raw >> 16) as u8),
        }
    }

    #[inline(always)]
    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.buffer_height
    }

    /// Raw pixel word at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.buffer[y * self.stride + x])
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.pixel(x, y).map(|raw| self.unpack(raw))
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let px = self.pack(color);
        self.buffer[y * self.stride + x] = px;
    }

    /// Clip `(x, y, w, h)` to the backing store. `None` if nothing is left.
    fn clip(&self, x: usize, y: usize, w: usize, h: usize) -> Option<(usize, usize)> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let w = w.min(self.width - x);
        let h = h.min(self.buffer_height - y);
        if w == 0 || h == 0 {
            return None;
        }
        Some((w, h))
    }

    /// Fill a rectangle, one slice fill per row.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        let Some((w, h)) = self.clip(x, y, w, h) else {
            return;
        };
        let px = self.pack(color);
        for row in y..y + h {
            let start = row * self.stride + x;
            self.buffer[start..start + w].fill(px);
        }
    }

    /// Fill the whole backing store, including rows outside the visible window.
    pub fn clear(&mut self, color: Color) {
        let px = self.pack(color);
        let len = self.stride * self.buffer_height;
        self.buffer[..len].fill(px);
    }

    /// Draw one glyph cell with its top-left corner at `(x, y)`.
    ///
    /// Cells that do not fit entirely are skipped.
    pub fn draw_char(&mut self, x: usize, y: usize, byte: u8, fg: Color, bg: Color) {
        let fits_x = x.checked_add(GLYPH_WIDTH).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(GLYPH_HEIGHT).is_some_and(|end| end <= self.buffer_height);
        if !fits_x || !fits_y {
            return;
        }

        let fg = self.pack(fg);
        let bg = self.pack(bg);
        let mut start = y * self.stride + x;
        for &bits in glyph(byte) {
            let row = &mut self.buffer[start..start + GLYPH_WIDTH];
            for (col, px) in row.iter_mut().enumerate() {
                *px = if bits & (0x80 >> col) != 0 { fg } else { bg };
            }
            start += self.stride;
        }
    }

    /// Pixel-level text layout: `\n` goes back to `x` and down one cell.
    pub fn draw_string(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        let mut cy = y;
        for byte in s.bytes() {
            if byte == b'\n' {
                cx = x;
                cy = cy.saturating_add(GLYPH_HEIGHT);
            } else {
                self.draw_char(cx, cy, byte, fg, bg);
                cx = cx.saturating_add(GLYPH_WIDTH);
            }
        }
    }

    /// Move `rows` whole rows from `src_y` to `dst_y`. Ranges may overlap.
    pub fn copy_rows(&mut self, src_y: usize, dst_y: usize, rows: usize) {
        if src_y >= self.buffer_height || dst_y >= self.buffer_height {
            return;
        }
        let rows = rows
            .min(self.buffer_height - src_y)
            .min(self.buffer_height - dst_y);
        if rows == 0 || src_y == dst_y {
            return;
        }
        let src = src_y * self.stride;
        self.buffer
            .copy_within(src..src + rows * self.stride, dst_y * self.stride);
    }

    /// Two-color swap over a rectangle: `bg` pixels become `fg`, everything
    /// else becomes `bg`. Applying it twice restores a two-color cell.
    pub fn invert_rect(&mut self, x: usize, y: usize, w: usize, h: usize, fg: Color, bg: Color) {
        let Some((w, h)) = self.clip(x, y, w, h) else {
            return;
        };
        let fg = self.pack(fg);
        let bg = self.pack(bg);
        for row in y..y + h {
            let start = row * self.stride + x;
            for px in &mut self.buffer[start..start + w] {
                *px = if *px == bg { fg } else { bg };
            }
        }
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.put_pixel(x as usize, y as usize, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.fill_rect(
            area.top_left.x.max(0) as usize,
            area.top_left.y.max(0) as usize,
            area.size.width as usize,
            area.size.height as usize,
            color.into(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Framebuffer::clear(self, color.into());
        Ok(())
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.buffer_height as u32)
    }
}
