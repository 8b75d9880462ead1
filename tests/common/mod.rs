//! In-memory SX127X stand-in for exercising the driver without hardware.
//!
//! Models the pieces the driver depends on: a register file, the shared
//! FIFO with its address pointer, write-1-to-clear interrupt flags, the
//! DIO0 level as a function of the mapping register and the flags, and a
//! reset pin that restores power-on state.
#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use sx127x::bus::RadioBus;
use sx127x::reg::Register;
use sx127x::sched::Idle;

const OP_MODE: usize = 0x01;
const FIFO_ADDR_PTR: usize = 0x0D;
const FIFO_RX_CURRENT_ADDR: usize = 0x10;
const IRQ_FLAGS: usize = 0x12;
const RX_NB_BYTES: usize = 0x13;
const DIO_MAPPING_1: usize = 0x40;
const VERSION: usize = 0x42;

pub struct Chip {
    pub regs: [u8; 0x80],
    pub fifo: [u8; 256],
    /// Every register write in order, as (address, value)
    pub writes: Vec<(u8, u8)>,
    /// Every FIFO burst read, as (start pointer, length)
    pub fifo_reads: Vec<(u8, usize)>,
    pub resets: u32,
    version: u8,
    in_reset: bool,
}

impl Chip {
    fn new(version: u8) -> Self {
        let mut chip = Self {
            regs: [0; 0x80],
            fifo: [0; 256],
            writes: Vec::new(),
            fifo_reads: Vec::new(),
            resets: 0,
            version,
            in_reset: false,
        };
        chip.power_on();
        chip
    }

    fn power_on(&mut self) {
        self.regs = [0; 0x80];
        // FSK standby with the low-frequency port selected
        self.regs[OP_MODE] = 0x09;
        self.regs[VERSION] = self.version;
    }

    pub fn write(&mut self, addr: u8, value: u8) {
        self.writes.push((addr, value));
        match addr as usize {
            IRQ_FLAGS => self.regs[IRQ_FLAGS] &= !value,
            0x00 => {
                let ptr = self.regs[FIFO_ADDR_PTR];
                self.fifo[ptr as usize] = value;
                self.regs[FIFO_ADDR_PTR] = ptr.wrapping_add(1);
            }
            reg => self.regs[reg] = value,
        }
    }

    pub fn read(&mut self, addr: u8) -> u8 {
        match addr as usize {
            0x00 => {
                let ptr = self.regs[FIFO_ADDR_PTR];
                self.regs[FIFO_ADDR_PTR] = ptr.wrapping_add(1);
                self.fifo[ptr as usize]
            }
            reg => self.regs[reg],
        }
    }

    /// Land a packet in the FIFO the way the modem does: payload stored at
    /// `start`, current-address and byte-count registers set, RxDone raised.
    pub fn inject_rx_packet(&mut self, start: u8, payload: &[u8]) {
        for (i, &byte) in payload.iter().enumerate() {
            self.fifo[start as usize + i] = byte;
        }
        self.regs[FIFO_RX_CURRENT_ADDR] = start;
        self.regs[RX_NB_BYTES] = payload.len() as u8;
        self.regs[IRQ_FLAGS] |= 0x40;
    }

    pub fn inject_tx_done(&mut self) {
        self.regs[IRQ_FLAGS] |= 0x08;
    }

    /// DIO0 outputs the event selected by the mapping register.
    pub fn dio0_level(&self) -> bool {
        match self.regs[DIO_MAPPING_1] >> 6 {
            0b00 => self.regs[IRQ_FLAGS] & 0x40 != 0,
            0b01 => self.regs[IRQ_FLAGS] & 0x08 != 0,
            _ => false,
        }
    }

    pub fn mode_bits(&self) -> u8 {
        self.regs[OP_MODE] & 0x07
    }

    pub fn irq_flags(&self) -> u8 {
        self.regs[IRQ_FLAGS]
    }

    /// Writes to one address, in order.
    pub fn writes_to(&self, addr: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(a, _)| *a == addr)
            .map(|(_, v)| *v)
            .collect()
    }
}

/// Shared handle to the simulated chip; the bus, the pins and the test body
/// all hold one.
#[derive(Clone)]
pub struct ChipHandle(Rc<RefCell<Chip>>);

impl ChipHandle {
    pub fn new() -> Self {
        Self::with_version(0x12)
    }

    pub fn with_version(version: u8) -> Self {
        Self(Rc::new(RefCell::new(Chip::new(version))))
    }

    pub fn chip(&self) -> RefMut<'_, Chip> {
        self.0.borrow_mut()
    }

    /// The bus plus the two pins the driver owns.
    pub fn parts(&self) -> (SimBus, ResetPin, Dio0Pin) {
        (
            SimBus(self.clone()),
            ResetPin(self.clone()),
            Dio0Pin(self.clone()),
        )
    }
}

/// `RadioBus` straight into the simulated register file.
pub struct SimBus(ChipHandle);

impl RadioBus for SimBus {
    type Error = Infallible;

    fn read_register(&mut self, reg: Register) -> Result<u8, Self::Error> {
        Ok(self.0.chip().read(reg.addr()))
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Self::Error> {
        self.0.chip().write(reg.addr(), value);
        Ok(())
    }

    fn read_fifo(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.chip();
        let start = chip.regs[FIFO_ADDR_PTR];
        chip.fifo_reads.push((start, buf.len()));
        for slot in buf.iter_mut() {
            *slot = chip.read(0x00);
        }
        Ok(())
    }

    fn write_fifo(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.chip();
        for &byte in data {
            chip.write(0x00, byte);
        }
        Ok(())
    }
}

/// Active-low reset line; a full low-high pulse restores power-on state.
pub struct ResetPin(ChipHandle);

impl ErrorType for ResetPin {
    type Error = Infallible;
}

impl OutputPin for ResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.chip().in_reset = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.0.chip();
        if chip.in_reset {
            chip.in_reset = false;
            chip.power_on();
            chip.resets += 1;
        }
        Ok(())
    }
}

/// The completion line as the chip would drive it.
pub struct Dio0Pin(ChipHandle);

impl ErrorType for Dio0Pin {
    type Error = Infallible;
}

impl InputPin for Dio0Pin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.chip().dio0_level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.chip().dio0_level())
    }
}

/// Idle stub that only counts how often the scheduler slept.
#[derive(Default)]
pub struct CountingIdle {
    pub count: u32,
}

impl Idle for CountingIdle {
    fn wait(&mut self) {
        self.count += 1;
    }
}

/// Idle stub that completes the transmission on the n-th sleep, standing in
/// for the DIO0 edge arriving while the processor naps.
pub struct FiringIdle {
    chip: ChipHandle,
    fire_on: u32,
    pub count: u32,
}

impl FiringIdle {
    pub fn new(chip: ChipHandle, fire_on: u32) -> Self {
        Self {
            chip,
            fire_on,
            count: 0,
        }
    }
}

impl Idle for FiringIdle {
    fn wait(&mut self) {
        self.count += 1;
        if self.count == self.fire_on {
            self.chip.chip().inject_tx_done();
        }
    }
}
