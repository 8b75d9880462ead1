use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::RadioBus;
use crate::conf::{Config, ConfigEntry, VersionPolicy};
use crate::diag;
use crate::err::{Error, PinError};
use crate::op::*;
use crate::reg::{Register, SILICON_VERSION};
use crate::sched::Idle;

/// Registers dumped by [`Sx127x::dump_settings`]: mode, carrier frequency,
/// last packet SNR/RSSI, live RSSI and the first two modem config bytes.
const SETTINGS_DUMP: [Register; 9] = [
    Register::OpMode,
    Register::FrfMsb,
    Register::FrfMid,
    Register::FrfLsb,
    Register::PktSnrValue,
    Register::PktRssiValue,
    Register::RssiValue,
    Register::ModemConfig1,
    Register::ModemConfig2,
];

/// Driver for an SX1276/77/78/79 LoRa modem behind a [`RadioBus`].
///
/// Owns the reset pin and the DIO0 completion line next to the bus. All
/// waits are bounded; a dead chip surfaces as [`Error::Timeout`] or
/// [`Error::Version`] instead of hanging the caller.
pub struct Sx127x<TBUS, TNRST, TDIO0> {
    bus: TBUS,
    nrst_pin: TNRST,
    dio0_pin: TDIO0,
    mode: Mode,
}

impl<TBUS, TNRST, TDIO0, TPINERR> Sx127x<TBUS, TNRST, TDIO0>
where
    TBUS: RadioBus,
    TNRST: OutputPin<Error = TPINERR>,
    TDIO0: InputPin<Error = TPINERR>,
{
    pub fn new(bus: TBUS, nrst_pin: TNRST, dio0_pin: TDIO0) -> Self {
        Self {
            bus,
            nrst_pin,
            dio0_pin,
            // power-on state until a reset pulse runs
            mode: Mode::Sleep,
        }
    }

    /// Give the bus and pins back.
    pub fn free(self) -> (TBUS, TNRST, TDIO0) {
        (self.bus, self.nrst_pin, self.dio0_pin)
    }

    /// The last operating mode commanded over the bus.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pulse the reset pin and wait for the chip to come back up.
    /// 7.2.2: at least 100 us low, then 5 ms before the first access.
    pub fn reset(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        self.nrst_pin
            .set_low()
            .map_err(|e| Error::Pin(PinError::Output(e)))?;
        delay.delay_us(100);
        self.nrst_pin
            .set_high()
            .map_err(|e| Error::Pin(PinError::Output(e)))?;
        delay.delay_ms(5);
        self.mode = Mode::Sleep;
        Ok(())
    }

    /// Read the silicon revision register.
    pub fn version(&mut self) -> Result<u8, Error<TBUS::Error, TPINERR>> {
        self.bus.read_register(Register::Version).map_err(Error::Bus)
    }

    /// Reset the chip, check the silicon revision against the configured
    /// policy and apply the full configuration sequence. Leaves the chip in
    /// Standby and returns the revision read.
    pub fn init(
        &mut self,
        delay: &mut impl DelayNs,
        conf: &Config,
    ) -> Result<u8, Error<TBUS::Error, TPINERR>> {
        self.reset(delay)?;

        let version = self.version()?;
        if version != SILICON_VERSION && conf.version_policy == VersionPolicy::Enforce {
            return Err(Error::Version { read: version });
        }

        for entry in conf.register_writes() {
            self.apply(entry)?;
        }
        Ok(version)
    }

    /// Write one configuration entry, keeping the tracked mode in step with
    /// mode-control writes the sequence performs.
    fn apply(&mut self, entry: ConfigEntry) -> Result<(), Error<TBUS::Error, TPINERR>> {
        self.bus
            .write_register(entry.reg, entry.value)
            .map_err(Error::Bus)?;
        if entry.reg == Register::OpMode {
            if let Some(mode) = Mode::from_bits(entry.value) {
                self.mode = mode;
            }
        }
        Ok(())
    }

    /// The single mode transition function. Rejects transitions the state
    /// machine does not allow; everything else is one read-modify-write of
    /// the mode-control register.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<TBUS::Error, TPINERR>> {
        if mode == self.mode {
            return Ok(());
        }
        if !self.mode.can_enter(mode) {
            return Err(Error::Transition {
                from: self.mode,
                to: mode,
            });
        }
        self.bus
            .update_register(Register::OpMode, MODE_KEEP_MASK, mode.bits())
            .map_err(Error::Bus)?;
        self.mode = mode;
        Ok(())
    }

    /// Map RxDone to DIO0 and arm the receiver until told otherwise.
    pub fn start_receive(&mut self) -> Result<(), Error<TBUS::Error, TPINERR>> {
        self.bus
            .write_register(Register::DioMapping1, Dio0Mapping::RxDone.bits())
            .map_err(Error::Bus)?;
        self.set_mode(Mode::ReceiveContinuous)
    }

    /// Load `payload` into the FIFO and start sending it. Completion is
    /// observed with [`Sx127x::wait_transmit_done`].
    pub fn transmit(&mut self, payload: &[u8]) -> Result<(), Error<TBUS::Error, TPINERR>> {
        debug_assert!(!payload.is_empty() && payload.len() <= 255);
        self.bus
            .write_register(Register::FifoAddrPtr, 0x00)
            .map_err(Error::Bus)?;
        self.bus.write_fifo(payload).map_err(Error::Bus)?;
        self.bus
            .write_register(Register::PayloadLength, payload.len() as u8)
            .map_err(Error::Bus)?;
        self.bus
            .write_register(Register::DioMapping1, Dio0Mapping::TxDone.bits())
            .map_err(Error::Bus)?;
        self.set_mode(Mode::Transmit)
    }

    /// Level of the DIO0 completion line.
    pub fn dio0_asserted(&mut self) -> Result<bool, Error<TBUS::Error, TPINERR>> {
        self.dio0_pin
            .is_high()
            .map_err(|e| Error::Pin(PinError::Input(e)))
    }

    pub fn irq_flags(&mut self) -> Result<IrqFlags, Error<TBUS::Error, TPINERR>> {
        let bits = self
            .bus
            .read_register(Register::IrqFlags)
            .map_err(Error::Bus)?;
        Ok(IrqFlags::from_bits_truncate(bits))
    }

    /// Acknowledge every pending interrupt (write-1-to-clear).
    pub fn clear_irq(&mut self) -> Result<(), Error<TBUS::Error, TPINERR>> {
        self.bus
            .write_register(Register::IrqFlags, IrqFlags::CLEAR_ALL.bits())
            .map_err(Error::Bus)
    }

    /// Whether a packet is really waiting: the DIO0 level is re-checked
    /// against the RxDone flag because the interrupt line may be shared
    /// with other wake sources.
    pub fn receive_pending(&mut self) -> Result<bool, Error<TBUS::Error, TPINERR>> {
        Ok(self.dio0_asserted()? && self.irq_flags()?.rx_done())
    }

    /// Drain the packet the chip just received: point the FIFO at the
    /// packet start, burst-read the advertised length, acknowledge all
    /// flags. The length register is authoritative; `buf` only bounds it.
    pub fn read_packet(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize, Error<TBUS::Error, TPINERR>> {
        let start = self
            .bus
            .read_register(Register::FifoRxCurrentAddr)
            .map_err(Error::Bus)?;
        self.bus
            .write_register(Register::FifoAddrPtr, start)
            .map_err(Error::Bus)?;
        let len = self
            .bus
            .read_register(Register::RxNbBytes)
            .map_err(Error::Bus)? as usize;
        let len = len.min(buf.len());
        self.bus.read_fifo(&mut buf[..len]).map_err(Error::Bus)?;
        self.clear_irq()?;
        Ok(len)
    }

    /// Sleep until the transmission is over. Each wake re-checks both the
    /// DIO0 level and the TxDone flag; the wait gives up with
    /// [`Error::Timeout`] after `max_wakes` wake cycles so a stalled chip
    /// cannot freeze the device.
    pub fn wait_transmit_done(
        &mut self,
        idle: &mut impl Idle,
        max_wakes: u32,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        let mut wakes = 0;
        while !(self.dio0_asserted()? && self.irq_flags()?.tx_done()) {
            if wakes == max_wakes {
                return Err(Error::Timeout);
            }
            idle.wait();
            wakes += 1;
        }
        Ok(())
    }

    /// SNR and RSSI of the last packet received.
    pub fn packet_status(&mut self) -> Result<PacketStatus, Error<TBUS::Error, TPINERR>> {
        let snr = self
            .bus
            .read_register(Register::PktSnrValue)
            .map_err(Error::Bus)?;
        let rssi = self
            .bus
            .read_register(Register::PktRssiValue)
            .map_err(Error::Bus)?;
        Ok(PacketStatus::from([snr, rssi]))
    }

    /// Dump one register to the console as hex and binary.
    pub fn print_register<W: fmt::Write>(
        &mut self,
        reg: Register,
        console: &mut W,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        let value = self.bus.read_register(reg).map_err(Error::Bus)?;
        diag::write_register_line(console, reg.addr(), value).ok();
        Ok(())
    }

    /// Dump the mode, frequency, signal and modem registers to the console.
    pub fn dump_settings<W: fmt::Write>(
        &mut self,
        console: &mut W,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        for reg in SETTINGS_DUMP {
            self.print_register(reg, console)?;
        }
        Ok(())
    }
}
