//! Kernel initialization phases
use log::{error, info};

/// Bring up the CPU-side subsystems the console depends on, in order.
pub fn init_kernel() -> Result<(), &'static str> {
    init_phase("Interrupt System", init_interrupts)?;
    info!("kernel initialization complete");
    Ok(())
}

fn init_phase(
    name: &'static str,
    init_fn: fn() -> Result<(), &'static str>,
) -> Result<(), &'static str> {
    info!("initializing {}", name);
    match init_fn() {
        Ok(()) => {
            info!("{} initialized", name);
            Ok(())
        }
        Err(e) => {
            error!("{} failed: {}", name, e);
            Err(e)
        }
    }
}

fn init_interrupts() -> Result<(), &'static str> {
    crate::interrupts::init();
    crate::interrupts::timer::unmask();
    x86_64::instructions::interrupts::enable();
    Ok(())
}
