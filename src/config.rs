//! Console configuration
//!
//! Everything here is fixed at build time; the kernel has no config files.

use crate::framebuffer::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Mode requested from the hardware layer. The hardware may pick another.
    pub mode_width: usize,
    pub mode_height: usize,
    /// Tab stops every `tab_width` columns.
    pub tab_width: usize,
    pub foreground: Color,
    pub background: Color,
    pub cursor_enabled: bool,
    /// Timer ticks between cursor blink requests.
    pub blink_interval_ticks: u64,
}

impl ConsoleConfig {
    pub const DEFAULT: ConsoleConfig = ConsoleConfig::new();

    pub const fn new() -> Self {
        Self {
            mode_width: 1920,
            mode_height: 1080,
            tab_width: 8,
            foreground: Color::WHITE,
            background: Color::BLACK,
            cursor_enabled: true,
            blink_interval_ticks: 9,
        }
    }

    pub const fn with_mode(mut self, width: usize, height: usize) -> Self {
        self.mode_width = width;
        self.mode_height = height;
        self
    }

    pub const fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub const fn with_cursor(mut self, enabled: bool) -> Self {
        self.cursor_enabled = enabled;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
