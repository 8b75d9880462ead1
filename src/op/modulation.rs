//! LoRa modulation parameters and their packing into the three modem
//! configuration registers.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bandwidth {
    /// 7.8 kHz
    Bw7 = 0x00,
    /// 10.4 kHz
    Bw10 = 0x01,
    /// 15.6 kHz
    Bw15 = 0x02,
    /// 20.8 kHz
    Bw20 = 0x03,
    /// 31.25 kHz
    Bw31 = 0x04,
    /// 41.7 kHz
    Bw41 = 0x05,
    /// 62.5 kHz
    Bw62 = 0x06,
    /// 125 kHz
    Bw125 = 0x07,
    /// 250 kHz
    Bw250 = 0x08,
    /// 500 kHz
    Bw500 = 0x09,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CodingRate {
    Cr4_5 = 0x01,
    Cr4_6 = 0x02,
    Cr4_7 = 0x03,
    Cr4_8 = 0x04,
}

/// Whether packets carry an in-band header with length and coding rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum HeaderMode {
    Explicit = 0x00,
    /// Fixed-length packets; the payload length register is authoritative
    Implicit = 0x01,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SpreadingFactor {
    Sf6 = 6,
    Sf7 = 7,
    Sf8 = 8,
    Sf9 = 9,
    Sf10 = 10,
    Sf11 = 11,
    Sf12 = 12,
}

impl SpreadingFactor {
    /// Detection-optimize tuning value for this spreading factor range
    /// (datasheet: 0xC5 for SF6, 0xC3 for SF7 to SF12).
    pub const fn detection_optimize(self) -> u8 {
        match self {
            Self::Sf6 => 0xC5,
            _ => 0xC3,
        }
    }

    /// Detection-threshold tuning value for this spreading factor range
    /// (0x0C for SF6, 0x0A for SF7 to SF12).
    pub const fn detection_threshold(self) -> u8 {
        match self {
            Self::Sf6 => 0x0C,
            _ => 0x0A,
        }
    }
}

/// Bandwidth, coding rate and header mode packed for ModemConfig1.
pub const fn modem_config1(bw: Bandwidth, cr: CodingRate, header: HeaderMode) -> u8 {
    (bw as u8) << 4 | (cr as u8) << 1 | header as u8
}

/// Spreading factor and payload CRC packed for ModemConfig2. The symbol
/// timeout MSB bits stay zero; receive-continuous mode ignores them.
pub const fn modem_config2(sf: SpreadingFactor, crc_on: bool) -> u8 {
    (sf as u8) << 4 | (crc_on as u8) << 2
}

/// Low-data-rate optimization and AGC packed for ModemConfig3. The
/// optimization bit is mandatory once the symbol time passes 16 ms, e.g.
/// SF11/SF12 on the narrow bandwidths.
pub const fn modem_config3(low_data_rate_optimize: bool, agc_auto: bool) -> u8 {
    (low_data_rate_optimize as u8) << 3 | (agc_auto as u8) << 2
}
