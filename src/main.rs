#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

extern crate rlibc;

use bootloader_api::{entry_point, BootInfo};
use core::fmt::Write;
use core::panic::PanicInfo;
use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use fbconsole::{BlinkRequest, Color, Console, ConsoleConfig};
use spin::Mutex;

use crate::kernel::{display::BootDisplay, init_kernel, init_logger, serial::Com1};

mod interrupts;
mod kernel;

entry_point!(kernel_main);

type KernelConsole = Console<'static, BootDisplay, Com1>;

pub static CONSOLE: Mutex<Option<KernelConsole>> = Mutex::new(None);

/// Raised from the timer interrupt, consumed by the main loop.
pub static BLINK: BlinkRequest = BlinkRequest::new();

#[macro_export]
macro_rules! println {
    () => ($crate::kernel::serial::_print(format_args!("\n")));
    ($($arg:tt)*) => ($crate::kernel::serial::_print(format_args!("{}\n", format_args!($($arg)*))));
}

pub fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    kernel::serial::init();
    if let Err(e) = init_logger(log::LevelFilter::Info) {
        println!("{}", e);
    }

    if let Err(e) = init_kernel() {
        println!("Kernel initialization failed: {}", e);
        loop_arch_hlt();
    }

    let display = BootDisplay::new(boot_info.framebuffer.as_mut());
    *CONSOLE.lock() = Some(Console::init(display, Com1, ConsoleConfig::DEFAULT));

    with_console(|con| {
        let (cols, rows, strategy) = (con.cols(), con.rows(), con.scroll_strategy());
        con.set_colors(Color::GREEN, Color::BLACK);
        con.puts("fbconsole\n");
        con.set_colors(Color::WHITE, Color::BLACK);
        let _ = writeln!(con, "{} x {} cells, {:?} scrolling", cols, rows, strategy);

        // Accent rule along the bottom pixel row of the banner line.
        con.with_framebuffer(|fb, offset| {
            let y = (offset + fbconsole::glyph::GLYPH_HEIGHT - 1) as i32;
            let end = fb.width() as i32 - 1;
            let _ = Line::new(Point::new(0, y), Point::new(end, y))
                .into_styled(PrimitiveStyle::with_stroke(Color::CYAN.to_rgb888(), 1))
                .draw(fb);
        });
    });

    loop {
        with_console(|con| con.service_blink(&BLINK));
        x86_64::instructions::hlt();
    }
}

fn with_console<R>(f: impl FnOnce(&mut KernelConsole) -> R) -> Option<R> {
    CONSOLE.lock().as_mut().map(f)
}

fn loop_arch_hlt() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // The panicking code may hold the port.
    unsafe { kernel::serial::SERIAL.force_unlock() };
    println!("PANIC : {} | {:?}", info.message(), info.location());
    loop_arch_hlt()
}
