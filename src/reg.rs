/// Every register the driver touches, as defined in the SX1276/77/78/79
/// datasheet (LoRa page). Addresses are 7 bits wide; the eighth bit of the
/// address byte on the wire selects write access and is never part of the
/// address itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// FIFO read/write access port. Reading or writing this address moves
    /// the FIFO address pointer
    Fifo = 0x00,
    /// Operating mode, modulation selection and low-frequency port switch.
    /// The LoRa mode bit may only be changed while the chip sleeps
    OpMode = 0x01,
    /// Carrier frequency, most significant byte
    FrfMsb = 0x06,
    /// Carrier frequency, middle byte
    FrfMid = 0x07,
    /// Carrier frequency, least significant byte
    FrfLsb = 0x08,
    /// Power amplifier selection, max power and output power
    PaConfig = 0x09,
    /// Over-current protection on/off and trim
    Ocp = 0x0B,
    /// Low-noise amplifier gain and HF boost
    Lna = 0x0C,
    /// FIFO address pointer for the next Fifo access
    FifoAddrPtr = 0x0D,
    /// Start of the transmit area within the FIFO
    FifoTxBaseAddr = 0x0E,
    /// Start of the receive area within the FIFO
    FifoRxBaseAddr = 0x0F,
    /// Start address of the last packet received
    FifoRxCurrentAddr = 0x10,
    /// Interrupt flags; write ones to clear
    IrqFlags = 0x12,
    /// Number of payload bytes of the last packet received
    RxNbBytes = 0x13,
    /// SNR estimate of the last packet received, in 0.25 dB steps
    PktSnrValue = 0x19,
    /// RSSI of the last packet received
    PktRssiValue = 0x1A,
    /// Current RSSI
    RssiValue = 0x1B,
    /// Bandwidth, coding rate and header mode
    ModemConfig1 = 0x1D,
    /// Spreading factor, payload CRC and symbol timeout MSB
    ModemConfig2 = 0x1E,
    /// Preamble length, most significant byte
    PreambleMsb = 0x20,
    /// Preamble length, least significant byte
    PreambleLsb = 0x21,
    /// Payload length in implicit header mode
    PayloadLength = 0x22,
    /// Low-data-rate optimization and automatic gain control
    ModemConfig3 = 0x26,
    /// LoRa detection optimize; depends on the spreading factor range
    DetectionOptimize = 0x31,
    /// LoRa detection threshold; depends on the spreading factor range
    DetectionThreshold = 0x37,
    /// Sync word; 0x12 for private networks, 0x34 for public networks
    SyncWord = 0x39,
    /// DIO0..DIO3 pin event mapping
    DioMapping1 = 0x40,
    /// Silicon revision, read-only
    Version = 0x42,
    /// High-power +20 dBm setting on the PA_BOOST pin
    PaDac = 0x4D,
}

/// Wire encoding of write access: address byte with the high bit set.
const WRITE_ACCESS: u8 = 0x80;

/// Value read from [`Register::Version`] on every production SX1276/77/78/79.
pub const SILICON_VERSION: u8 = 0x12;

impl Register {
    /// The 7-bit register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Address byte announcing a read transaction.
    pub const fn wire_read(self) -> u8 {
        self as u8
    }

    /// Address byte announcing a write transaction.
    pub const fn wire_write(self) -> u8 {
        self as u8 | WRITE_ACCESS
    }
}
