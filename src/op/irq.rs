use bitflags::bitflags;

bitflags! {
    /// Interrupt flags register contents. The hardware register is
    /// write-1-to-clear; [`CLEAR_ALL`](IrqFlags::CLEAR_ALL) acknowledges and
    /// re-arms everything.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct IrqFlags: u8 {
        const RX_TIMEOUT = 1 << 7;
        const RX_DONE = 1 << 6;
        const PAYLOAD_CRC_ERROR = 1 << 5;
        const VALID_HEADER = 1 << 4;
        const TX_DONE = 1 << 3;
        const CAD_DONE = 1 << 2;
        const FHSS_CHANGE_CHANNEL = 1 << 1;
        const CAD_DETECTED = 1 << 0;

        const CLEAR_ALL = 0xFF;
    }
}

impl IrqFlags {
    pub const fn rx_done(self) -> bool {
        self.contains(Self::RX_DONE)
    }

    pub const fn tx_done(self) -> bool {
        self.contains(Self::TX_DONE)
    }

    pub const fn crc_error(self) -> bool {
        self.contains(Self::PAYLOAD_CRC_ERROR)
    }
}

/// Event routed to the DIO0 output pin through the mapping register.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dio0Mapping {
    RxDone = 0b00 << 6,
    TxDone = 0b01 << 6,
    CadDone = 0b10 << 6,
}

impl Dio0Mapping {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
