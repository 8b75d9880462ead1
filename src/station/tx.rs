use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::RadioBus;
use crate::conf::Config;
use crate::err::Error;
use crate::op::Mode;
use crate::sched::Idle;
use crate::sx::Sx127x;
use crate::uprintln;

/// Wake cycles slept between transmissions. At one timer tick per second
/// this is roughly an hourly beacon.
pub const DEFAULT_PAUSE_WAKES: u16 = 3600;

/// Wake budget for one transmission to complete before it counts as stuck.
pub const DEFAULT_TX_TIMEOUT_WAKES: u32 = 16;

/// Periodic transmit station: configure, send one payload, sleep through
/// the pause, repeat. The chip spends almost all of its life in Sleep.
pub struct Beacon<'p, TBUS, TNRST, TDIO0> {
    radio: Sx127x<TBUS, TNRST, TDIO0>,
    conf: Config,
    payload: &'p [u8],
    pause_wakes: u16,
    tx_timeout_wakes: u32,
}

impl<'p, TBUS, TNRST, TDIO0, TPINERR> Beacon<'p, TBUS, TNRST, TDIO0>
where
    TBUS: RadioBus,
    TNRST: OutputPin<Error = TPINERR>,
    TDIO0: InputPin<Error = TPINERR>,
{
    pub fn new(radio: Sx127x<TBUS, TNRST, TDIO0>, conf: Config, payload: &'p [u8]) -> Self {
        Self {
            radio,
            conf,
            payload,
            pause_wakes: DEFAULT_PAUSE_WAKES,
            tx_timeout_wakes: DEFAULT_TX_TIMEOUT_WAKES,
        }
    }

    pub fn set_pause_wakes(mut self, pause_wakes: u16) -> Self {
        self.pause_wakes = pause_wakes;
        self
    }

    pub fn set_tx_timeout_wakes(mut self, tx_timeout_wakes: u32) -> Self {
        self.tx_timeout_wakes = tx_timeout_wakes;
        self
    }

    pub fn radio(&mut self) -> &mut Sx127x<TBUS, TNRST, TDIO0> {
        &mut self.radio
    }

    /// One full duty cycle: reset and configure the chip, send the payload,
    /// sleep until the completion line and the TxDone flag agree, drop back
    /// to Sleep, then pause for the configured number of wake cycles.
    pub fn run_cycle<W: fmt::Write>(
        &mut self,
        delay: &mut impl DelayNs,
        idle: &mut impl Idle,
        console: &mut W,
    ) -> Result<(), Error<TBUS::Error, TPINERR>> {
        self.radio.init(delay, &self.conf)?;
        self.radio.transmit(self.payload)?;
        uprintln!(console, "transmit");

        self.radio.wait_transmit_done(idle, self.tx_timeout_wakes)?;
        uprintln!(console, "transmit done");

        self.radio.clear_irq()?;
        self.radio.set_mode(Mode::Sleep)?;

        for _ in 0..self.pause_wakes {
            idle.wait();
        }
        Ok(())
    }

    /// Beacon forever. A failed cycle is reported to the console and the
    /// next cycle's reset pulse brings the chip back to a known state.
    pub fn run<W: fmt::Write>(
        &mut self,
        delay: &mut impl DelayNs,
        idle: &mut impl Idle,
        console: &mut W,
    ) -> !
    where
        TBUS::Error: fmt::Debug,
        TPINERR: fmt::Debug,
    {
        loop {
            if let Err(e) = self.run_cycle(delay, idle, console) {
                uprintln!(console, "radio fault: {:?}", e);
                idle.wait();
            }
        }
    }
}
