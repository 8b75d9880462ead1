//! Text output to the diagnostic console.
//!
//! The console is any [`core::fmt::Write`] sink, typically a UART transmit
//! wrapper on hardware. Lines end in `\r\n` as serial terminals expect.

use core::fmt;

/// One register dump line: address and value in hex, value again as
/// nibble-split binary. Example: `0x01: 0x8D = 1000 1101`.
pub fn write_register_line<W: fmt::Write>(w: &mut W, addr: u8, value: u8) -> fmt::Result {
    write!(
        w,
        "0x{:02X}: 0x{:02X} = {:04b} {:04b}\r\n",
        addr,
        value,
        value >> 4,
        value & 0x0F
    )
}

#[macro_export]
macro_rules! uprint {
    ($serial:expr, $($arg:tt)*) => {
        core::fmt::Write::write_fmt($serial, format_args!($($arg)*)).ok()
    };
}

#[macro_export]
macro_rules! uprintln {
    ($serial:expr, $fmt:expr) => {
        $crate::uprint!($serial, concat!($fmt, "\r\n"))
    };
    ($serial:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::uprint!($serial, concat!($fmt, "\r\n"), $($arg)*)
    };
}
