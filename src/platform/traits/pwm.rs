//! PWM interface trait

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// PWM frequency in Hz
    pub frequency: u32,
    /// Initial duty cycle (0.0 = 0%, 1.0 = 100%)
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 50, // 50 Hz for servos and ESCs
            duty_cycle: 0.0,
        }
    }
}

/// PWM interface trait
///
/// Platform implementations must provide this interface for PWM output
/// control. The actuator layer converts pulse widths to duty cycles before
/// calling into it; duty cycle must be in range [0.0, 1.0].
pub trait PwmInterface {
    /// Set PWM duty cycle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the duty
    /// cycle is outside [0.0, 1.0].
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Get current duty cycle
    fn duty_cycle(&self) -> f32;

    /// Set PWM frequency in Hz
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Get current frequency in Hz
    fn frequency(&self) -> u32;

    /// Enable PWM output
    fn enable(&mut self);

    /// Disable PWM output
    fn disable(&mut self);

    /// Check if PWM is enabled
    fn is_enabled(&self) -> bool;
}
