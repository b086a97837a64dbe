//! # fbconsole
//!
//! A kernel text console over a linear framebuffer.
//!
//! ```text
//!  putc/puts ──▶ Console ──▶ Framebuffer ──▶ backing store (u32 pixels)
//!                   │             ▲
//!                   │             └── glyph (8x16 bitmap font)
//!                   ├──▶ DisplayHal  (mode-set, scroll register)
//!                   └──▶ SerialSink  (no display: bytes go here)
//! ```
//!
//! The library is `no_std` and allocation-free. It builds on the host for
//! tests, where the hardware seams are backed by in-memory mocks.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod error;
pub mod framebuffer;
pub mod glyph;
pub mod hal;

#[cfg(test)]
mod testing;

pub use config::ConsoleConfig;
pub use console::{BlinkRequest, Console, ScrollStrategy};
pub use error::DisplayError;
pub use framebuffer::{Color, Framebuffer};
pub use hal::{DisplayHal, ModeInfo, PixelFormat, SerialSink};
