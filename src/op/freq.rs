/// Carrier frequency as the three-byte register value.
///
/// Frf = Fcarrier * 2^19 / Fxtal, split into MSB, mid and LSB bytes
/// (datasheet 4.1.4, register table p. 109).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frf {
    inner: [u8; 3],
}

impl From<Frf> for [u8; 3] {
    fn from(val: Frf) -> Self {
        val.inner
    }
}

impl From<[u8; 3]> for Frf {
    fn from(inner: [u8; 3]) -> Self {
        Self { inner }
    }
}

impl Frf {
    /// Calculate the register value for a carrier frequency in Hz, given the
    /// crystal frequency (32 MHz on the common SX127X modules). Rounds to
    /// the nearest frequency step (Fxtal / 2^19, about 61 Hz).
    pub const fn from_hz(carrier_hz: u32, fxtal_hz: u32) -> Self {
        let frf = (((carrier_hz as u64) << 19) + (fxtal_hz as u64 / 2)) / fxtal_hz as u64;
        Self {
            inner: [(frf >> 16) as u8, (frf >> 8) as u8, frf as u8],
        }
    }

    /// The carrier frequency in Hz this register value selects.
    pub const fn as_hz(self, fxtal_hz: u32) -> u32 {
        let frf = ((self.inner[0] as u64) << 16)
            | ((self.inner[1] as u64) << 8)
            | self.inner[2] as u64;
        ((frf * fxtal_hz as u64 + (1 << 18)) >> 19) as u32
    }

    pub const fn msb(self) -> u8 {
        self.inner[0]
    }

    pub const fn mid(self) -> u8 {
        self.inner[1]
    }

    pub const fn lsb(self) -> u8 {
        self.inner[2]
    }
}
