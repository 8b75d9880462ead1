use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::RadioBus;
use crate::conf::Config;
use crate::diag;
use crate::err::Error;
use crate::reg::Register;
use crate::sched::{Events, Idle};
use crate::sx::Sx127x;
use crate::uprintln;

/// Continuous-receive station: arm the radio once, then forward every
/// packet to the console as its own line.
///
/// The DIO0 interrupt handler only calls [`Events::signal_radio`]; the FIFO
/// drain runs here, in the foreground, so the interrupt context never
/// touches the bus.
pub struct Receiver<TBUS, TNRST, TDIO0> {
    radio: Sx127x<TBUS, TNRST, TDIO0>,
    conf: Config,
}

impl<TBUS, TNRST, TDIO0, TPINERR> Receiver<TBUS, TNRST, TDIO0>
where
    TBUS: RadioBus,
    TNRST: OutputPin<Error = TPINERR>,
    TDIO0: InputPin<Error = TPINERR>,
{
    pub fn new(radio: Sx127x<TBUS, TNRST, TDIO0>, conf: Config) -> Self {
        Self { radio, conf }
    }

    pub fn radio(&mut self) -> &mut Sx127x<TBUS, TNRST, TDIO0> {
        &mut self.radio
    }

    /// Configure the chip and arm continuous receive. The silicon revision
    /// is dumped to the console the way every boot of the original firmware
    /// did.
    pub fn start<W: fmt::Write>(
        &mut self,
        delay: &mut impl DelayNs,
        console: &mut W,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        let version = self.radio.init(delay, &self.conf)?;
        diag::write_register_line(console, Register::Version.addr(), version).ok();
        self.radio.start_receive()
    }

    /// Drain every packet the radio has pending and forward it to the
    /// console. Returns the number of packets drained. Tick and console
    /// wakes are consumed here; they exist only to wake the scheduler.
    pub fn poll<W: fmt::Write>(
        &mut self,
        events: &Events,
        console: &mut W,
    ) -> Result<usize, Error<TBUS::Error, TPINERR>> {
        events.take_tick();
        events.take_console();
        if !events.take_radio() {
            return Ok(0);
        }

        let mut drained = 0;
        while self.radio.receive_pending()? {
            let mut payload = [0u8; 255];
            let len = self.radio.read_packet(&mut payload)?;
            for &byte in &payload[..len] {
                console.write_char(byte as char).ok();
            }
            console.write_str("\r\n").ok();
            drained += 1;
        }
        Ok(drained)
    }

    /// The scheduler loop: sleep whenever nothing is pending, drain when
    /// woken, report faults to the console and recover by re-initializing
    /// the chip.
    pub fn run<W: fmt::Write>(
        &mut self,
        delay: &mut impl DelayNs,
        events: &Events,
        idle: &mut impl Idle,
        console: &mut W,
    ) -> !
    where
        TBUS::Error: fmt::Debug,
        TPINERR: fmt::Debug,
    {
        loop {
            if let Err(e) = self.start(delay, console) {
                uprintln!(console, "radio fault: {:?}", e);
                idle.wait();
                continue;
            }
            loop {
                match self.poll(events, console) {
                    Err(e) => {
                        uprintln!(console, "radio fault: {:?}", e);
                        break;
                    }
                    Ok(_) => {
                        if !events.any_pending() {
                            idle.wait();
                        }
                    }
                }
            }
        }
    }
}
