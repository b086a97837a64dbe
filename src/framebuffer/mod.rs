//! # Framebuffer Core
//!
//! Pixel-level drawing into the linear backing store handed over by the
//! hardware layer.
//!
//! ## Modules
//!
//! - `framebuffer`: [`Framebuffer`] with pixel, rectangle, glyph and row-copy
//!   primitives, plus an `embedded-graphics` `DrawTarget` implementation
//! - `color`: [`Color`] packed `0x00RRGGBB` with common constants
//!
//! ## Bounds
//!
//! Every primitive clips against the **backing store** (`width` x
//! `buffer_height`), not the visible window. With hardware scrolling the
//! console draws into rows that are not on screen yet, so clipping to the
//! visible height would drop that output.
//!
//! ```text
//!  row 0             ┌──────────────┐
//!                    │              │
//!  scroll_offset ──▶ ├──────────────┤ ◀─ visible window
//!                    │   visible    │    (height rows)
//!                    ├──────────────┤
//!                    │              │
//!  buffer_height ──▶ └──────────────┘
//! ```

pub mod color;
#[allow(clippy::module_inception)]
pub mod framebuffer;

pub use color::Color;
pub use framebuffer::Framebuffer;
