use crate::op::Mode;

/// Error of a single SPI bus access, tagged with the failed operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpiError<TSPIERR> {
    Write(TSPIERR),
    Transfer(TSPIERR),
    Flush(TSPIERR),
}

/// Error of a single digital pin access.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinError<TPINERR> {
    Input(TPINERR),
    Output(TPINERR),
}

/// Error of a chip-select bracketed bus transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusError<TSPIERR, TPINERR> {
    Spi(SpiError<TSPIERR>),
    Select(PinError<TPINERR>),
}

impl<TSPIERR, TPINERR> From<SpiError<TSPIERR>> for BusError<TSPIERR, TPINERR> {
    fn from(err: SpiError<TSPIERR>) -> Self {
        Self::Spi(err)
    }
}

impl<TSPIERR, TPINERR> From<PinError<TPINERR>> for BusError<TSPIERR, TPINERR> {
    fn from(err: PinError<TPINERR>) -> Self {
        Self::Select(err)
    }
}

/// Driver-level error. `TBUSERR` is the error of the underlying
/// [`RadioBus`](crate::bus::RadioBus), `TPINERR` the error of the reset and
/// DIO0 pins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error<TBUSERR, TPINERR> {
    /// A bus transaction failed
    Bus(TBUSERR),
    /// The reset or DIO0 pin failed
    Pin(PinError<TPINERR>),
    /// The version register did not read back the expected silicon revision.
    /// Usually means the chip is absent, unpowered or not an SX127X
    Version { read: u8 },
    /// The requested operating-mode change is not reachable from the current
    /// mode
    Transition { from: Mode, to: Mode },
    /// A completion wait exhausted its wake budget
    Timeout,
}

impl<TBUSERR, TPINERR> From<PinError<TPINERR>> for Error<TBUSERR, TPINERR> {
    fn from(err: PinError<TPINERR>) -> Self {
        Self::Pin(err)
    }
}
