use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::err::{PinError, SpiError};

/// Owner of the NSS pin. Transactions are only possible through
/// [`SlaveSelect::select`], which hands out a guard that releases the chip
/// again when dropped.
pub struct SlaveSelect<TNSS: OutputPin> {
    nss: TNSS,
}

impl<TNSS: OutputPin> SlaveSelect<TNSS> {
    pub fn new(nss: TNSS) -> Self {
        Self { nss }
    }

    pub fn free(self) -> TNSS {
        self.nss
    }

    /// Assert NSS and take the bus for one transaction. The guard borrows
    /// the bus exclusively, so nothing can interleave until it drops.
    pub fn select<'nss, 'spi, TSPI: SpiBus>(
        &'nss mut self,
        spi: &'spi mut TSPI,
    ) -> Result<SlaveSelectGuard<'nss, 'spi, TNSS, TSPI>, PinError<TNSS::Error>> {
        self.nss.set_low().map_err(PinError::Output)?;
        Ok(SlaveSelectGuard {
            nss: &mut self.nss,
            spi,
        })
    }
}

pub struct SlaveSelectGuard<'nss, 'spi, TNSS: OutputPin, TSPI: SpiBus> {
    nss: &'nss mut TNSS,
    spi: &'spi mut TSPI,
}

impl<TNSS: OutputPin, TSPI: SpiBus> Drop for SlaveSelectGuard<'_, '_, TNSS, TSPI> {
    fn drop(&mut self) {
        let _ = self.nss.set_high();
    }
}

impl<TNSS: OutputPin, TSPI: SpiBus> SlaveSelectGuard<'_, '_, TNSS, TSPI> {
    pub fn write(&mut self, words: &[u8]) -> Result<(), SpiError<TSPI::Error>> {
        self.spi.write(words).map_err(SpiError::Write)
    }

    pub fn read(&mut self, words: &mut [u8]) -> Result<(), SpiError<TSPI::Error>> {
        self.spi.read(words).map_err(SpiError::Transfer)
    }

    pub fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), SpiError<TSPI::Error>> {
        self.spi.transfer_in_place(words).map_err(SpiError::Transfer)
    }

    /// Wait until the peripheral has clocked everything out. Must be called
    /// before the guard drops and deasserts NSS.
    pub fn flush(&mut self) -> Result<(), SpiError<TSPI::Error>> {
        self.spi.flush().map_err(SpiError::Flush)
    }
}
