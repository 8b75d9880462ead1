//! Typed values for the registers the driver writes, and their packing into
//! register bytes.
pub mod freq;
pub mod irq;
pub mod mode;
pub mod modulation;
pub mod power;
pub mod status;

pub use freq::*;
pub use irq::*;
pub use mode::*;
pub use modulation::*;
pub use power::*;
pub use status::*;
