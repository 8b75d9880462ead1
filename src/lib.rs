#![no_std]
//! Driver for the Semtech SX1276/77/78/79 family of LoRa modems.
//!
//! The chip is controlled through a register-oriented SPI bus, signals
//! completions on its DIO0 pin, and spends its idle life asleep. The driver
//! mirrors that split:
//!
//! - [`bus`]: one exclusive chip-select-bracketed transaction per register
//!   access, behind the [`bus::RadioBus`] trait so tests can run against a
//!   simulated chip.
//! - [`conf`]: the ordered configuration sequence. Order matters; the chip
//!   only accepts the LoRa modulation bit while asleep, and the final write
//!   of a sequence enters the target operating mode.
//! - [`sx`]: the driver proper with the single mode-transition function,
//!   the FIFO packet path and bounded completion waits.
//! - [`sched`]: interrupt-to-foreground wake flags and the idle sleep
//!   primitive. Interrupt handlers only signal; all bus traffic stays in
//!   the foreground.
//! - [`station`]: the two deployment roles, a continuous receiver and a
//!   periodic beacon.
//!
//! # Example
//!
//! ```no_run
//! use core::fmt;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::SpiBus;
//! use sx127x::bus::SpiInterface;
//! use sx127x::sched::{Events, Idle};
//! use sx127x::station::Receiver;
//! use sx127x::{Config, Sx127x};
//!
//! fn run_receiver<TSPI, TNSS, TNRST, TDIO0, TPINERR>(
//!     spi: TSPI,
//!     nss: TNSS,
//!     nrst: TNRST,
//!     dio0: TDIO0,
//!     delay: &mut impl DelayNs,
//!     idle: &mut impl Idle,
//!     console: &mut impl fmt::Write,
//!     events: &Events,
//! ) -> !
//! where
//!     TSPI: SpiBus,
//!     TSPI::Error: fmt::Debug,
//!     TNSS: OutputPin<Error = TPINERR>,
//!     TNRST: OutputPin<Error = TPINERR>,
//!     TDIO0: InputPin<Error = TPINERR>,
//!     TPINERR: fmt::Debug,
//! {
//!     let radio = Sx127x::new(SpiInterface::new(spi, nss), nrst, dio0);
//!     let mut receiver = Receiver::new(radio, Config::default());
//!     receiver.run(delay, events, idle, console)
//! }
//! ```

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod conf;
pub mod diag;
pub mod err;
pub mod gpio;
pub mod op;
pub mod reg;
pub mod sched;
pub mod station;
pub mod sx;

pub use conf::{Config, ConfigEntry, VersionPolicy};
pub use err::Error;
pub use sx::Sx127x;
