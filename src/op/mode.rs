/// Operating mode bits of the mode-control register.
///
/// The chip is in exactly one of these at any time. Mode changes happen only
/// through a write of these bits; nothing in the driver infers a mode from
/// other registers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Oscillators off. Boot state, and the only state in which the LoRa
    /// modulation bit may be changed
    Sleep = 0b000,
    /// Oscillators running, radio front end off. Modem parameters are
    /// written here
    Standby = 0b001,
    /// Send the FIFO payload, then raise TxDone
    Transmit = 0b011,
    /// Stay armed and raise RxDone per packet until told otherwise
    ReceiveContinuous = 0b101,
}

/// Bits of the mode-control register that do not belong to the mode field.
pub const MODE_KEEP_MASK: u8 = 0xF8;

impl Mode {
    /// The three mode bits as written to the mode-control register.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the mode field of a mode-control register value.
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x07 {
            0b000 => Some(Self::Sleep),
            0b001 => Some(Self::Standby),
            0b011 => Some(Self::Transmit),
            0b101 => Some(Self::ReceiveContinuous),
            _ => None,
        }
    }

    /// Whether `to` may be entered directly from `self`.
    ///
    /// Sleep and Standby may enter any mode. The active modes only fall back
    /// to Sleep or Standby; switching between transmit and receive without
    /// passing through an idle mode is rejected.
    pub const fn can_enter(self, to: Mode) -> bool {
        match self {
            Self::Sleep | Self::Standby => true,
            Self::Transmit | Self::ReceiveContinuous => {
                matches!(to, Self::Sleep | Self::Standby)
            }
        }
    }
}
