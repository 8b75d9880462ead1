use crate::op::*;
use crate::reg::Register;

/// One step of the configuration sequence: a register and the byte written
/// to it. Tables of these are applied strictly in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub reg: Register,
    pub value: u8,
}

/// What to do when the version register does not read back the expected
/// silicon revision after reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Fail initialization. An absent or unpowered chip is surfaced
    /// immediately instead of misconfiguring thin air
    #[default]
    Enforce,
    /// Carry on regardless; the caller may still log the value read
    Ignore,
}

/// Number of entries in [`Config::register_writes`].
pub const CONFIG_SEQUENCE_LEN: usize = 20;

/// Modem configuration applied by `Sx127x::init`.
///
/// The defaults reproduce a long-range 434.8 MHz link: SF12 over 62.5 kHz,
/// 4/8 coding, explicit header, full PA boost.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub bandwidth: Bandwidth,
    pub spreading_factor: SpreadingFactor,
    pub coding_rate: CodingRate,
    pub header_mode: HeaderMode,
    pub crc_on: bool,
    pub ocp: Ocp,
    pub lna: Lna,
    pub pa: PaConfig,
    pub pa_dac: PaDac,
    pub preamble_len: u16,
    pub sync_word: u8,
    pub agc_auto: bool,
    pub low_data_rate_optimize: bool,
    /// Route the signal through the low-frequency input port (below 779 MHz)
    pub low_frequency_port: bool,
    pub frf: Frf,
    pub version_policy: VersionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bandwidth: Bandwidth::Bw62,
            spreading_factor: SpreadingFactor::Sf12,
            coding_rate: CodingRate::Cr4_8,
            header_mode: HeaderMode::Explicit,
            crc_on: false,
            ocp: Ocp::off(),
            lna: Lna::default(),
            pa: PaConfig::default(),
            pa_dac: PaDac::Boost20Dbm,
            preamble_len: 6,
            sync_word: 0x12,
            agc_auto: true,
            low_data_rate_optimize: true,
            low_frequency_port: true,
            frf: Frf::from_hz(434_800_000, 32_000_000),
            version_policy: VersionPolicy::default(),
        }
    }
}

impl Config {
    pub fn set_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn set_spreading_factor(mut self, spreading_factor: SpreadingFactor) -> Self {
        self.spreading_factor = spreading_factor;
        self
    }

    pub fn set_coding_rate(mut self, coding_rate: CodingRate) -> Self {
        self.coding_rate = coding_rate;
        self
    }

    pub fn set_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn set_crc_on(mut self, crc_on: bool) -> Self {
        self.crc_on = crc_on;
        self
    }

    pub fn set_ocp(mut self, ocp: Ocp) -> Self {
        self.ocp = ocp;
        self
    }

    pub fn set_lna(mut self, lna: Lna) -> Self {
        self.lna = lna;
        self
    }

    pub fn set_pa(mut self, pa: PaConfig) -> Self {
        self.pa = pa;
        self
    }

    pub fn set_pa_dac(mut self, pa_dac: PaDac) -> Self {
        self.pa_dac = pa_dac;
        self
    }

    pub fn set_preamble_len(mut self, preamble_len: u16) -> Self {
        self.preamble_len = preamble_len;
        self
    }

    pub fn set_sync_word(mut self, sync_word: u8) -> Self {
        self.sync_word = sync_word;
        self
    }

    pub fn set_agc_auto(mut self, agc_auto: bool) -> Self {
        self.agc_auto = agc_auto;
        self
    }

    pub fn set_low_data_rate_optimize(mut self, low_data_rate_optimize: bool) -> Self {
        self.low_data_rate_optimize = low_data_rate_optimize;
        self
    }

    pub fn set_low_frequency_port(mut self, low_frequency_port: bool) -> Self {
        self.low_frequency_port = low_frequency_port;
        self
    }

    pub fn set_frf(mut self, frf: Frf) -> Self {
        self.frf = frf;
        self
    }

    pub fn set_version_policy(mut self, version_policy: VersionPolicy) -> Self {
        self.version_policy = version_policy;
        self
    }

    /// Mode-control register value for `mode`, with or without the LoRa
    /// modulation bit.
    pub(crate) fn op_mode(&self, lora: bool, mode: Mode) -> u8 {
        (lora as u8) << 7 | (self.low_frequency_port as u8) << 3 | mode.bits()
    }

    /// The full configuration sequence, applied in order by `Sx127x::init`.
    ///
    /// The order is load-bearing: the chip must sleep before the LoRa bit is
    /// accepted, modem parameters follow under the new modulation, and the
    /// final entry leaves the chip in Standby ready for a receive or
    /// transmit entry.
    pub fn register_writes(&self) -> [ConfigEntry; CONFIG_SEQUENCE_LEN] {
        let entry = |reg, value| ConfigEntry { reg, value };
        [
            entry(Register::OpMode, self.op_mode(false, Mode::Sleep)),
            entry(Register::OpMode, self.op_mode(true, Mode::Sleep)),
            entry(Register::FrfMsb, self.frf.msb()),
            entry(Register::FrfMid, self.frf.mid()),
            entry(Register::FrfLsb, self.frf.lsb()),
            entry(Register::Ocp, self.ocp.bits()),
            entry(Register::Lna, self.lna.bits()),
            entry(
                Register::ModemConfig1,
                modem_config1(self.bandwidth, self.coding_rate, self.header_mode),
            ),
            entry(
                Register::ModemConfig2,
                modem_config2(self.spreading_factor, self.crc_on),
            ),
            entry(
                Register::ModemConfig3,
                modem_config3(self.low_data_rate_optimize, self.agc_auto),
            ),
            entry(Register::PreambleMsb, (self.preamble_len >> 8) as u8),
            entry(Register::PreambleLsb, self.preamble_len as u8),
            entry(
                Register::DetectionOptimize,
                self.spreading_factor.detection_optimize(),
            ),
            entry(
                Register::DetectionThreshold,
                self.spreading_factor.detection_threshold(),
            ),
            entry(Register::SyncWord, self.sync_word),
            entry(Register::PaDac, self.pa_dac.bits()),
            entry(Register::PaConfig, self.pa.bits()),
            entry(Register::FifoTxBaseAddr, 0x00),
            entry(Register::FifoRxBaseAddr, 0x00),
            entry(Register::OpMode, self.op_mode(true, Mode::Standby)),
        ]
    }
}
