use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::slave_select::SlaveSelect;
use super::RadioBus;
use crate::err::BusError;
use crate::reg::Register;

/// [`RadioBus`] over an SPI peripheral and an NSS pin.
///
/// Wire format: one address byte with the high bit encoding write access,
/// followed by the data byte, or by the burst payload for FIFO access. Every
/// call asserts NSS, runs to completion, flushes and deasserts NSS.
pub struct SpiInterface<TSPI, TNSS: OutputPin> {
    spi: TSPI,
    nss: SlaveSelect<TNSS>,
}

impl<TSPI, TNSS> SpiInterface<TSPI, TNSS>
where
    TSPI: SpiBus,
    TNSS: OutputPin,
{
    pub fn new(spi: TSPI, nss: TNSS) -> Self {
        Self {
            spi,
            nss: SlaveSelect::new(nss),
        }
    }

    /// Give the SPI peripheral and the NSS pin back.
    pub fn free(self) -> (TSPI, TNSS) {
        (self.spi, self.nss.free())
    }
}

impl<TSPI, TNSS> RadioBus for SpiInterface<TSPI, TNSS>
where
    TSPI: SpiBus,
    TNSS: OutputPin,
{
    type Error = BusError<TSPI::Error, TNSS::Error>;

    fn read_register(&mut self, reg: Register) -> Result<u8, Self::Error> {
        let mut guard = self.nss.select(&mut self.spi)?;
        let mut frame = [reg.wire_read(), 0x00];
        guard.transfer_in_place(&mut frame)?;
        guard.flush()?;
        Ok(frame[1])
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Self::Error> {
        let mut guard = self.nss.select(&mut self.spi)?;
        guard.write(&[reg.wire_write(), value])?;
        guard.flush()?;
        Ok(())
    }

    fn read_fifo(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut guard = self.nss.select(&mut self.spi)?;
        guard.write(&[Register::Fifo.wire_read()])?;
        guard.read(buf)?;
        guard.flush()?;
        Ok(())
    }

    fn write_fifo(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut guard = self.nss.select(&mut self.spi)?;
        guard.write(&[Register::Fifo.wire_write()])?;
        guard.write(data)?;
        guard.flush()?;
        Ok(())
    }
}
