use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Stand-in for a pin the board does not wire up. Output writes are
/// swallowed, input reads are permanently low.
pub struct DisconnectedPin;

impl ErrorType for DisconnectedPin {
    type Error = Infallible;
}

impl OutputPin for DisconnectedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl InputPin for DisconnectedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}
