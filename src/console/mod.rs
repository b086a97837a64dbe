//! # Text Console
//!
//! A character-cell terminal over the [`Framebuffer`]. Owns the cursor, the
//! color pair, the scroll offset and the scrolling strategy.
//!
//! ## Byte dispatch
//!
//! | Byte        | Effect                                                   |
//! |-------------|----------------------------------------------------------|
//! | `\n`        | column 0, next row, scroll up on the last row            |
//! | `\r`        | column 0                                                 |
//! | `\t`        | next tab stop, newline if past the last column           |
//! | `\b`        | one column left, nothing erased                          |
//! | 0x20-0x7E   | draw glyph, advance, wrap at the last column             |
//! | anything else | ignored                                                |
//!
//! ## Cursor
//!
//! The cursor is drawn by swapping every pixel of its cell between the
//! foreground and background color; there is no saved copy of what was under
//! it. Drawing over the cursor cell while the cursor is shown would make the
//! next swap corrupt the cell, so every mutating operation hides the cursor
//! first and re-shows it afterwards through one guarded helper.
//!
//! ```text
//!            blink / show_cursor            set_cursor_enabled(false)
//!  Hidden ─────────────────────────▶ Shown ──────────────────────────▶ Hidden
//!    ▲                                 │
//!    └──────── blink / any mutation ───┘   (re-shown afterwards if enabled)
//! ```
//!
//! ## No display
//!
//! When the framebuffer could not be initialized, `putc`/`puts` go to the
//! serial sink with `\n` expanded to `\r\n` and everything else is a no-op.

mod blink;
mod scroll;

pub use blink::BlinkRequest;
pub use scroll::ScrollStrategy;

use crate::config::ConsoleConfig;
use crate::error::DisplayError;
use crate::framebuffer::{Color, Framebuffer};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::hal::{DisplayHal, SerialSink};
use core::fmt;
use log::{info, warn};

pub struct Console<'a, H, S> {
    hal: H,
    serial: S,
    config: ConsoleConfig,
    screen: Option<Screen<'a>>,
}

/// Console state that only exists once a framebuffer is up.
pub(crate) struct Screen<'a> {
    fb: Framebuffer<'a>,
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    fg: Color,
    bg: Color,
    tab_width: usize,
    cursor_shown: bool,
    cursor_enabled: bool,
    scroll_offset: usize,
    strategy: ScrollStrategy,
}

/// A clipped cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

/// Clip a signed cell region to a `rows` x `cols` grid.
///
/// Negative origins are moved to 0 without shrinking the extent, then the
/// extent is cut at the grid edge. Returns `None` if nothing is left.
pub fn clip_region(
    rows: usize,
    cols: usize,
    row: i32,
    col: i32,
    width: i32,
    height: i32,
) -> Option<CellRect> {
    let row = i64::from(row.max(0));
    let col = i64::from(col.max(0));
    let height = i64::from(height).min(rows as i64 - row);
    let width = i64::from(width).min(cols as i64 - col);
    if width <= 0 || height <= 0 {
        return None;
    }
    Some(CellRect {
        row: row as usize,
        col: col as usize,
        width: width as usize,
        height: height as usize,
    })
}

impl<'a> Screen<'a> {
    fn new<H: DisplayHal<'a>>(
        fb: Framebuffer<'a>,
        hal: &mut H,
        config: &ConsoleConfig,
    ) -> Result<Self, DisplayError> {
        let cols = fb.width() / GLYPH_WIDTH;
        let rows = fb.height() / GLYPH_HEIGHT;
        if cols == 0 || rows == 0 {
            return Err(DisplayError::ModeSetFailed("mode smaller than one cell"));
        }

        let strategy = ScrollStrategy::probe(hal, &fb);
        info!(
            "console: {}x{} cells on {}x{} (buffer height {}), {:?} scrolling",
            cols, rows, fb.width(), fb.height(), fb.buffer_height(), strategy
        );

        Ok(Self {
            fb,
            rows,
            cols,
            row: 0,
            col: 0,
            fg: config.foreground,
            bg: config.background,
            tab_width: config.tab_width.max(1),
            cursor_shown: false,
            cursor_enabled: config.cursor_enabled,
            scroll_offset: 0,
            strategy,
        })
    }

    /// Backing-store pixel row of the top of cell row `row`.
    #[inline(always)]
    fn row_y(&self, row: usize) -> usize {
        self.scroll_offset + row * GLYPH_HEIGHT
    }

    fn draw_cursor(&mut self, show: bool) {
        if show == self.cursor_shown {
            return;
        }
        let x = self.col * GLYPH_WIDTH;
        let y = self.row_y(self.row);
        self.fb
            .invert_rect(x, y, GLYPH_WIDTH, GLYPH_HEIGHT, self.fg, self.bg);
        self.cursor_shown = show;
    }

    fn show_cursor_if_enabled(&mut self) {
        if self.cursor_enabled && !self.cursor_shown {
            self.draw_cursor(true);
        }
    }

    /// Run `f` with the cursor cell restored, then show the cursor again at
    /// wherever it ended up.
    fn with_cursor_hidden<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.cursor_shown {
            self.draw_cursor(false);
        }
        let result = f(self);
        self.show_cursor_if_enabled();
        result
    }

    fn newline<'h, H: DisplayHal<'h>>(&mut self, hal: &mut H) {
        self.col = 0;
        self.row += 1;
        if self.row >= self.rows {
            self.scroll_up(hal);
            self.row = self.rows - 1;
        }
    }

    fn dispatch<'h, H: DisplayHal<'h>>(&mut self, byte: u8, hal: &mut H) {
        match byte {
            b'\n' => self.newline(hal),
            b'\r' => self.col = 0,
            b'\t' => {
                self.col = (self.col / self.tab_width + 1) * self.tab_width;
                if self.col >= self.cols {
                    self.newline(hal);
                }
            }
            0x08 => self.col = self.col.saturating_sub(1),
            0x20..=0x7E => {
                let y = self.row_y(self.row);
                self.fb
                    .draw_char(self.col * GLYPH_WIDTH, y, byte, self.fg, self.bg);
                self.col += 1;
                if self.col >= self.cols {
                    self.newline(hal);
                }
            }
            _ => {}
        }
    }
}

impl<'a, H: DisplayHal<'a>, S: SerialSink> Console<'a, H, S> {
    /// Bring up the display through `hal`.
    ///
    /// Never fails: without a usable framebuffer the console stays in
    /// serial pass-through mode for good.
    pub fn init(mut hal: H, serial: S, config: ConsoleConfig) -> Self {
        match Framebuffer::init(&mut hal, config.mode_width, config.mode_height) {
            Ok(fb) => Self::from_framebuffer(fb, hal, serial, config),
            Err(e) => Self::unavailable(hal, serial, config, e),
        }
    }

    /// Attach to a framebuffer that is already up. Its contents are kept.
    pub fn from_framebuffer(fb: Framebuffer<'a>, mut hal: H, serial: S, config: ConsoleConfig) -> Self {
        match Screen::new(fb, &mut hal, &config) {
            Ok(screen) => Self { hal, serial, config, screen: Some(screen) },
            Err(e) => Self::unavailable(hal, serial, config, e),
        }
    }

    fn unavailable(hal: H, serial: S, config: ConsoleConfig, e: DisplayError) -> Self {
        warn!("console: display unavailable ({}), falling back to serial", e);
        Self { hal, serial, config, screen: None }
    }

    pub fn is_display_available(&self) -> bool {
        self.screen.is_some()
    }

    fn serial_byte(serial: &mut S, byte: u8) {
        if byte == b'\n' {
            serial.write_byte(b'\r');
        }
        serial.write_byte(byte);
    }

    pub fn putc(&mut self, byte: u8) {
        match self.screen.as_mut() {
            Some(screen) => {
                let hal = &mut self.hal;
                screen.with_cursor_hidden(|s| s.dispatch(byte, hal));
            }
            None => Self::serial_byte(&mut self.serial, byte),
        }
    }

    pub fn puts(&mut self, s: &str) {
        for byte in s.bytes() {
            self.putc(byte);
        }
    }

    /// Clear the whole backing store to the background color and home the
    /// cursor. Resets the hardware scroll window to the top.
    pub fn clear(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        let hal = &mut self.hal;
        screen.with_cursor_hidden(|s| {
            if s.strategy.is_hardware() {
                s.scroll_offset = 0;
                if let Err(e) = hal.set_scroll_offset(0) {
                    warn!("console: scroll reset not applied: {}", e);
                }
            }
            s.fb.clear(s.bg);
            s.row = 0;
            s.col = 0;
        });
    }

    /// Clear from the cursor to the right edge of the screen, one rectangle fill.
    pub fn clear_to_eol(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        screen.with_cursor_hidden(|s| {
            let x = s.col * GLYPH_WIDTH;
            let y = s.row_y(s.row);
            let w = s.fb.width() - x;
            s.fb.fill_rect(x, y, w, GLYPH_HEIGHT, s.bg);
        });
    }

    /// Clear a cell rectangle, clipped to the grid, with one rectangle fill.
    pub fn clear_region(&mut self, row: i32, col: i32, width: i32, height: i32) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        let Some(rect) = clip_region(screen.rows, screen.cols, row, col, width, height) else {
            return;
        };
        screen.with_cursor_hidden(|s| {
            let x = rect.col * GLYPH_WIDTH;
            let y = s.row_y(rect.row);
            s.fb.fill_rect(
                x,
                y,
                rect.width * GLYPH_WIDTH,
                rect.height * GLYPH_HEIGHT,
                s.bg,
            );
        });
    }

    /// Move the cursor. Each coordinate is applied only if it is on the
    /// grid; the other one still moves.
    pub fn set_cursor(&mut self, row: i32, col: i32) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        screen.with_cursor_hidden(|s| {
            if let Ok(row) = usize::try_from(row) {
                if row < s.rows {
                    s.row = row;
                }
            }
            if let Ok(col) = usize::try_from(col) {
                if col < s.cols {
                    s.col = col;
                }
            }
        });
    }

    /// `(row, col)` of the cursor; `(0, 0)` without a display.
    pub fn cursor(&self) -> (usize, usize) {
        self.screen.as_ref().map_or((0, 0), |s| (s.row, s.col))
    }

    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        screen.with_cursor_hidden(|s| {
            s.fg = fg;
            s.bg = bg;
        });
    }

    /// `(foreground, background)` currently applied to new output.
    pub fn colors(&self) -> (Color, Color) {
        self.screen.as_ref().map_or(
            (self.config.foreground, self.config.background),
            |s| (s.fg, s.bg),
        )
    }

    pub fn rows(&self) -> usize {
        self.screen.as_ref().map_or(0, |s| s.rows)
    }

    pub fn cols(&self) -> usize {
        self.screen.as_ref().map_or(0, |s| s.cols)
    }

    /// Toggle the cursor between shown and hidden. Does nothing while the
    /// cursor is disabled.
    pub fn blink(&mut self) {
        if let Some(s) = self.screen.as_mut() {
            if s.cursor_enabled {
                let shown = s.cursor_shown;
                s.draw_cursor(!shown);
            }
        }
    }

    /// Perform a pending blink raised from interrupt context, if any.
    pub fn service_blink(&mut self, request: &BlinkRequest) {
        if request.take() {
            self.blink();
        }
    }

    pub fn set_cursor_enabled(&mut self, enabled: bool) {
        if let Some(s) = self.screen.as_mut() {
            if !enabled {
                s.draw_cursor(false);
            }
            s.cursor_enabled = enabled;
        }
    }

    pub fn cursor_enabled(&self) -> bool {
        self.screen.as_ref().is_some_and(|s| s.cursor_enabled)
    }

    /// Draw the cursor now if it is enabled and currently hidden.
    pub fn show_cursor(&mut self) {
        if let Some(s) = self.screen.as_mut() {
            s.show_cursor_if_enabled();
        }
    }

    /// Pixel row of the backing store at the top of the visible window.
    pub fn scroll_offset(&self) -> usize {
        self.screen.as_ref().map_or(0, |s| s.scroll_offset)
    }

    pub fn scroll_strategy(&self) -> Option<ScrollStrategy> {
        self.screen.as_ref().map(|s| s.strategy)
    }

    pub fn framebuffer(&self) -> Option<&Framebuffer<'a>> {
        self.screen.as_ref().map(|s| &s.fb)
    }

    /// Draw directly on the framebuffer with the cursor out of the way.
    ///
    /// `f` also receives the current scroll offset: visible row `y` is
    /// backing-store row `scroll_offset + y`.
    pub fn with_framebuffer<R>(
        &mut self,
        f: impl FnOnce(&mut Framebuffer<'a>, usize) -> R,
    ) -> Option<R> {
        let screen = self.screen.as_mut()?;
        Some(screen.with_cursor_hidden(|s| f(&mut s.fb, s.scroll_offset)))
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }
}

impl<'a, H: DisplayHal<'a>, S: SerialSink> fmt::Write for Console<'a, H, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s);
        Ok(())
    }
}
