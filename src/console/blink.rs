//! Cursor blink requests
//!
//! The timer interrupt must not touch pixel memory while a `putc` may be
//! halfway through a cell. It only raises a flag here; the main path
//! consumes it with [`Console::service_blink`](super::Console::service_blink)
//! between byte dispatches.

use core::sync::atomic::{AtomicBool, Ordering};

pub struct BlinkRequest {
    pending: AtomicBool,
}

impl BlinkRequest {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Interrupt-safe: a single atomic store.
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Raise a request on every `interval`-th tick.
    pub fn on_tick(&self, tick: u64, interval: u64) {
        if interval != 0 && tick % interval == 0 {
            self.request();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was set. Requests raised more
    /// than once before being consumed collapse into one.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for BlinkRequest {
    fn default() -> Self {
        Self::new()
    }
}
