//! Byte-level transport to the chip's register file.
//!
//! The driver talks to the chip exclusively through [`RadioBus`], so it can
//! run against [`SpiInterface`] on hardware and against an in-memory chip in
//! tests. Implementations must make every call one exclusive transaction:
//! nothing may interleave between chip-select assert and deassert.

mod slave_select;
pub mod spi;

pub use slave_select::{SlaveSelect, SlaveSelectGuard};
pub use spi::SpiInterface;

use crate::reg::Register;

/// One register-oriented serial bus to a radio chip.
///
/// This layer is a pure byte transport; registers with read side effects are
/// the caller's concern.
pub trait RadioBus {
    type Error;

    /// Read one register in one exclusive transaction.
    fn read_register(&mut self, reg: Register) -> Result<u8, Self::Error>;

    /// Write one register in one exclusive transaction.
    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Self::Error>;

    /// Burst-read `buf.len()` bytes from the FIFO port in one exclusive
    /// transaction. The FIFO address pointer must be set beforehand.
    fn read_fifo(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Burst-write `data` through the FIFO port in one exclusive
    /// transaction. The FIFO address pointer must be set beforehand.
    fn write_fifo(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Read-modify-write: preserve the bits under `keep_mask`, OR in
    /// `set_bits`. Used for every partial-register change so unrelated bits
    /// are never clobbered.
    fn update_register(
        &mut self,
        reg: Register,
        keep_mask: u8,
        set_bits: u8,
    ) -> Result<(), Self::Error> {
        let current = self.read_register(reg)?;
        self.write_register(reg, (current & keep_mask) | set_bits)
    }
}
