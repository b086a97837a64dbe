//! COM1: early-boot `println!`, the `log` backend and the console's
//! no-display fallback all share one port.

use core::fmt::{self, Write};
use fbconsole::SerialSink;
use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;
use uart_16550::SerialPort;
use x86_64::instructions::interrupts::without_interrupts;

const COM1_BASE: u16 = 0x3F8;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(COM1_BASE) });

pub fn init() {
    without_interrupts(|| SERIAL.lock().init());
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    without_interrupts(|| {
        let _ = SERIAL.lock().write_fmt(args);
    });
}

/// Byte sink for the console. Takes the port lock per byte, so log lines
/// and console output interleave at byte granularity at worst.
///
/// Bytes go out unmodified; `send` would expand backspace into an erase
/// sequence.
pub struct Com1;

impl SerialSink for Com1 {
    fn write_byte(&mut self, byte: u8) {
        without_interrupts(|| SERIAL.lock().send_raw(byte));
    }
}

pub struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            _print(format_args!(
                "[{:>5}] {}: {}\n",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: SerialLogger = SerialLogger;

pub fn init_logger(level: LevelFilter) -> Result<(), &'static str> {
    log::set_logger(&LOGGER).map_err(|_| "logger already installed")?;
    log::set_max_level(level);
    Ok(())
}
