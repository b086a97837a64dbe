//! Display error type.
//!
//! Every failure here is decided once, at initialization. Drawing calls
//! never fail; out-of-range input is clamped or ignored instead.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The hardware layer could not set any display mode.
    ModeSetFailed(&'static str),

    /// A mode was set but no pixel buffer came with it.
    NoBuffer,

    /// The pixel buffer is shorter than `stride * buffer_height` pixels.
    BufferTooSmall { needed: usize, actual: usize },

    /// The buffer's pixel layout is not a 32-bit format we can draw into.
    UnsupportedFormat(&'static str),

    /// The scroll-offset register rejected the requested offset.
    ScrollUnsupported,
}

impl DisplayError {
    /// Short description, usable without `fmt` machinery.
    pub fn message(&self) -> &'static str {
        match self {
            DisplayError::ModeSetFailed(_) => "display mode-set failed",
            DisplayError::NoBuffer => "no framebuffer available",
            DisplayError::BufferTooSmall { .. } => "framebuffer smaller than reported geometry",
            DisplayError::UnsupportedFormat(_) => "unsupported pixel format",
            DisplayError::ScrollUnsupported => "scroll offset rejected by hardware",
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::ModeSetFailed(why) | DisplayError::UnsupportedFormat(why) => {
                write!(f, "{}: {}", self.message(), why)
            }
            DisplayError::BufferTooSmall { needed, actual } => {
                write!(f, "{} (need {} pixels, have {})", self.message(), needed, actual)
            }
            _ => f.write_str(self.message()),
        }
    }
}
