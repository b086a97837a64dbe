//! Line scrolling
//!
//! Two strategies sit behind [`Screen::scroll_up`], picked once at init:
//!
//! - **Hardware**: the backing store is taller than the screen. Scrolling
//!   moves the visible window down one cell row and writes the new offset to
//!   the GPU scroll register. When the window would run off the end of the
//!   backing store, the visible rows are first copied back to row 0 and the
//!   offset restarts there. That copy happens once every
//!   `max_offset / GLYPH_HEIGHT + 1` scrolls; the rest only write the register.
//! - **Software**: the visible rows are copied up one cell row every time.

use super::Screen;
use crate::framebuffer::Framebuffer;
use crate::glyph::GLYPH_HEIGHT;
use crate::hal::DisplayHal;
use log::{info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStrategy {
    /// `max_offset` is `buffer_height - height`.
    Hardware { max_offset: usize },
    Software,
}

impl ScrollStrategy {
    /// Hardware scrolling needs room for at least one cell row below the
    /// screen and a scroll register that accepts offset 0.
    pub fn probe<'a, H: DisplayHal<'a>>(hal: &mut H, fb: &Framebuffer<'_>) -> Self {
        let max_offset = fb.buffer_height() - fb.height();
        if max_offset < GLYPH_HEIGHT {
            return ScrollStrategy::Software;
        }

        match hal.set_scroll_offset(0) {
            Ok(()) => ScrollStrategy::Hardware { max_offset },
            Err(e) => {
                info!("console: {}, using software scroll", e);
                ScrollStrategy::Software
            }
        }
    }

    pub fn is_hardware(&self) -> bool {
        matches!(self, ScrollStrategy::Hardware { .. })
    }
}

impl Screen<'_> {
    pub(super) fn scroll_up<'h, H: DisplayHal<'h>>(&mut self, hal: &mut H) {
        match self.strategy {
            ScrollStrategy::Software => {
                let height = self.fb.height();
                self.fb.copy_rows(GLYPH_HEIGHT, 0, height - GLYPH_HEIGHT);
                self.clear_bottom_row();
            }
            ScrollStrategy::Hardware { max_offset } => {
                if self.scroll_offset + GLYPH_HEIGHT > max_offset {
                    let height = self.fb.height();
                    self.fb.copy_rows(self.scroll_offset, 0, height);
                    self.scroll_offset = 0;
                    trace!("console: scroll window wrapped to top of backing store");
                }
                self.scroll_offset += GLYPH_HEIGHT;
                self.clear_bottom_row();

                // One register write per scroll, wrapped or not.
                if let Err(e) = hal.set_scroll_offset(self.scroll_offset) {
                    warn!("console: scroll offset {} not applied: {}", self.scroll_offset, e);
                }
            }
        }
    }

    /// Clear the last text row through the bottom edge of the visible window.
    fn clear_bottom_row(&mut self) {
        let top = (self.rows - 1) * GLYPH_HEIGHT;
        let width = self.fb.width();
        let height = self.fb.height() - top;
        self.fb
            .fill_rect(0, self.scroll_offset + top, width, height, self.bg);
    }
}
