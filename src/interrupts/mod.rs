//! # Interrupt Handling
//!
//! | Vector | Type            | Handler                 |
//! |--------|-----------------|-------------------------|
//! | 0-31   | CPU exceptions  | divide, page fault, etc |
//! | 32     | Timer (IRQ0)    | timer_interrupt_handler |
//!
//! The timer handler never draws. It raises the console's blink request,
//! which the main loop services between console operations.

use crate::interrupts::{interrupts::init_idt, pic::PICS};

pub mod gdt;
pub mod interrupts;
pub mod pic;
pub mod timer;

pub fn init() {
    gdt::init();
    init_idt();
    unsafe { PICS.lock().initialize() };
}
