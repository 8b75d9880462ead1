//! The two station roles the driver is deployed in: a permanently armed
//! receiver that dumps traffic to the console, and a low-duty-cycle beacon.
pub mod rx;
pub mod tx;

pub use rx::Receiver;
pub use tx::Beacon;
