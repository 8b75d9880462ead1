//! Power amplifier, over-current protection and LNA settings.

/// Which output pin the power amplifier drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaSelect {
    /// RFO pin, up to +14 dBm
    Rfo = 0x00,
    /// PA_BOOST pin, up to +17 dBm (+20 dBm with the PA DAC boosted)
    PaBoost = 0x80,
}

/// Power-amplifier routing and output level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaConfig {
    pa_select: PaSelect,
    max_power: u8,
    output_power: u8,
}

impl Default for PaConfig {
    /// PA_BOOST at the top of its range, as the stock RA-01 firmware runs.
    fn default() -> Self {
        Self {
            pa_select: PaSelect::PaBoost,
            max_power: 0x07,
            output_power: 0x0F,
        }
    }
}

impl PaConfig {
    pub fn set_pa_select(mut self, pa_select: PaSelect) -> Self {
        self.pa_select = pa_select;
        self
    }

    /// Pmax = 10.8 + 0.6 * max_power dBm, RFO pin only. Three bits.
    pub fn set_max_power(mut self, max_power: u8) -> Self {
        debug_assert!(max_power <= 0x07);
        self.max_power = max_power & 0x07;
        self
    }

    /// Output power field, four bits. On PA_BOOST:
    /// Pout = 17 - (15 - output_power) dBm.
    pub fn set_output_power(mut self, output_power: u8) -> Self {
        debug_assert!(output_power <= 0x0F);
        self.output_power = output_power & 0x0F;
        self
    }

    pub const fn bits(self) -> u8 {
        self.pa_select as u8 | self.max_power << 4 | self.output_power
    }
}

/// High-power mode of the PA DAC, lifting PA_BOOST from +17 to +20 dBm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaDac {
    Default = 0x84,
    Boost20Dbm = 0x87,
}

impl PaDac {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Over-current protection for the power amplifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ocp {
    on: bool,
    trim: u8,
}

impl Ocp {
    /// Protection disabled, trim left at its reset value.
    pub const fn off() -> Self {
        Self { on: false, trim: 0x0B }
    }

    /// Protection enabled with the given 5-bit trim
    /// (Imax = 45 + 5 * trim mA up to trim 15).
    pub const fn on(trim: u8) -> Self {
        Self { on: true, trim: trim & 0x1F }
    }

    pub const fn bits(self) -> u8 {
        (self.on as u8) << 5 | self.trim
    }
}

/// Low-noise amplifier gain step; G1 is the highest gain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LnaGain {
    G1 = 0b001,
    G2 = 0b010,
    G3 = 0b011,
    G4 = 0b100,
    G5 = 0b101,
    G6 = 0b110,
}

/// LNA gain selection and HF-port current boost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lna {
    gain: LnaGain,
    boost_hf: bool,
}

impl Default for Lna {
    fn default() -> Self {
        Self {
            gain: LnaGain::G1,
            boost_hf: false,
        }
    }
}

impl Lna {
    pub fn set_gain(mut self, gain: LnaGain) -> Self {
        self.gain = gain;
        self
    }

    pub fn set_boost_hf(mut self, boost_hf: bool) -> Self {
        self.boost_hf = boost_hf;
        self
    }

    pub const fn bits(self) -> u8 {
        (self.gain as u8) << 5 | if self.boost_hf { 0b11 } else { 0b00 }
    }
}
