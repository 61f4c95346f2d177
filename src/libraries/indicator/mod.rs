//! Status indicator abstraction
//!
//! The rover reports its link state through a two-color status light:
//! green while valid RC frames are arriving, red while the failsafe holds
//! the outputs at neutral.

use crate::platform::traits::GpioInterface;

/// Status indicator interface
///
/// Both operations are idempotent; the control loop calls them every
/// iteration in whichever state it is in.
pub trait IndicatorInterface {
    /// Show the "receiving valid input" state
    fn set_alive(&mut self) -> Result<(), &'static str>;

    /// Show the "failsafe active" state
    fn set_failsafe(&mut self) -> Result<(), &'static str>;
}

/// Two-color status LED on a pair of GPIO pins
pub struct DualColorLed<'a> {
    green: &'a mut dyn GpioInterface,
    red: &'a mut dyn GpioInterface,
}

impl<'a> DualColorLed<'a> {
    /// Create a new status LED from its green and red pins
    pub fn new(green: &'a mut dyn GpioInterface, red: &'a mut dyn GpioInterface) -> Self {
        Self { green, red }
    }
}

impl<'a> IndicatorInterface for DualColorLed<'a> {
    fn set_alive(&mut self) -> Result<(), &'static str> {
        self.green.set_high().map_err(|_| "indicator GPIO error")?;
        self.red.set_low().map_err(|_| "indicator GPIO error")?;
        Ok(())
    }

    fn set_failsafe(&mut self) -> Result<(), &'static str> {
        self.green.set_low().map_err(|_| "indicator GPIO error")?;
        self.red.set_high().map_err(|_| "indicator GPIO error")?;
        Ok(())
    }
}
