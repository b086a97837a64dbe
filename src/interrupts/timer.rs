//! PIT tick counter (IRQ0)
use core::sync::atomic::{AtomicU64, Ordering};
use x86_64::instructions::port::Port;

const PIC_1_DATA: u16 = 0x21;

static TICKS: AtomicU64 = AtomicU64::new(0);

/// Count one tick and return the new total.
pub fn tick() -> u64 {
    TICKS.fetch_add(1, Ordering::Relaxed) + 1
}

/// Let IRQ0 through the primary PIC.
pub fn unmask() {
    let mut data = Port::<u8>::new(PIC_1_DATA);
    unsafe {
        let mask = data.read();
        data.write(mask & !0x01);
    }
}
