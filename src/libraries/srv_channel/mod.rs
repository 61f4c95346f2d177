//! Actuator abstraction for rover steering and throttle
//!
//! This module provides a safe abstraction layer between control logic and
//! PWM hardware:
//! - Steering commanded as a servo angle (0-180 degrees, 90 = center)
//! - Throttle commanded normalized (-1.0 reverse, 0.0 stop, +1.0 forward)
//! - PWM conversion (pulse width → duty cycle at 50 Hz)
//! - Calibration support (min/neutral/max pulse widths)
//!
//! Callers are expected to pre-clamp commands to the documented ranges; the
//! conversion still clamps internally so a wild value can never produce a
//! pulse outside the calibrated window.

use crate::platform::traits::PwmInterface;

/// Servo refresh period at 50 Hz, in microseconds
const PWM_PERIOD_US: f32 = 20_000.0;

/// Full steering servo travel in degrees
pub const STEERING_RANGE_DEG: f32 = 180.0;

/// Actuator interface for rover control
pub trait ActuatorInterface {
    /// Set steering servo angle
    ///
    /// # Arguments
    ///
    /// * `angle_deg` - Steering angle (0.0 full left, 90.0 center, 180.0 full right)
    fn set_steering(&mut self, angle_deg: f32) -> Result<(), &'static str>;

    /// Set throttle command
    ///
    /// # Arguments
    ///
    /// * `normalized` - Throttle command (-1.0 reverse, 0.0 stop, +1.0 forward)
    fn set_throttle(&mut self, normalized: f32) -> Result<(), &'static str>;

    /// Get current steering angle (degrees)
    fn steering(&self) -> f32;

    /// Get current throttle value
    fn throttle(&self) -> f32;
}

/// Actuator calibration configuration
///
/// Defines PWM pulse widths for the steering servo and throttle ESC.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorConfig {
    /// Steering pulse width at 0 degrees (µs)
    pub steering_min: u16,
    /// Steering pulse width at 180 degrees (µs)
    pub steering_max: u16,
    /// Throttle pulse width at full reverse (µs)
    pub throttle_min: u16,
    /// Throttle pulse width at stop (µs)
    pub throttle_neutral: u16,
    /// Throttle pulse width at full forward (µs)
    pub throttle_max: u16,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            steering_min: 1000,
            steering_max: 2000,
            throttle_min: 1000,
            throttle_neutral: 1500,
            throttle_max: 2000,
        }
    }
}

/// Actuator implementation for rover
///
/// Manages the steering servo and throttle ESC over two PWM channels.
pub struct Actuators<'a> {
    steering_pwm: &'a mut dyn PwmInterface,
    throttle_pwm: &'a mut dyn PwmInterface,
    config: ActuatorConfig,
    current_steering: f32,
    current_throttle: f32,
}

impl<'a> Actuators<'a> {
    /// Create new actuators
    ///
    /// # Arguments
    ///
    /// * `steering_pwm` - PWM interface for the steering servo
    /// * `throttle_pwm` - PWM interface for the throttle ESC
    /// * `config` - Pulse-width calibration
    pub fn new(
        steering_pwm: &'a mut dyn PwmInterface,
        throttle_pwm: &'a mut dyn PwmInterface,
        config: ActuatorConfig,
    ) -> Self {
        Self {
            steering_pwm,
            throttle_pwm,
            config,
            current_steering: STEERING_RANGE_DEG / 2.0,
            current_throttle: 0.0,
        }
    }

    /// Convert a servo angle to a pulse width (µs), linear min..max
    fn angle_to_pulse(angle_deg: f32, min: u16, max: u16) -> u16 {
        let fraction = (angle_deg / STEERING_RANGE_DEG).clamp(0.0, 1.0);
        let range = (max - min) as f32;
        min + (range * fraction) as u16
    }

    /// Convert a normalized value to a pulse width (µs)
    ///
    /// Negative values interpolate between min and neutral, positive values
    /// between neutral and max.
    fn normalized_to_pulse(normalized: f32, min: u16, neutral: u16, max: u16) -> u16 {
        let clamped = normalized.clamp(-1.0, 1.0);

        if clamped < 0.0 {
            let range = (neutral - min) as f32;
            neutral - (range * -clamped) as u16
        } else {
            let range = (max - neutral) as f32;
            neutral + (range * clamped) as u16
        }
    }

    /// Convert a pulse width to a duty cycle at the 50 Hz servo period
    ///
    /// 1000 µs = 5.0%, 1500 µs = 7.5%, 2000 µs = 10.0%.
    fn pulse_to_duty_cycle(pulse_us: u16) -> f32 {
        pulse_us as f32 / PWM_PERIOD_US
    }
}

impl<'a> ActuatorInterface for Actuators<'a> {
    fn set_steering(&mut self, angle_deg: f32) -> Result<(), &'static str> {
        let angle = angle_deg.clamp(0.0, STEERING_RANGE_DEG);
        self.current_steering = angle;

        let pulse_us =
            Self::angle_to_pulse(angle, self.config.steering_min, self.config.steering_max);
        let duty = Self::pulse_to_duty_cycle(pulse_us);

        self.steering_pwm
            .set_duty_cycle(duty)
            .map_err(|_| "steering PWM error")?;

        Ok(())
    }

    fn set_throttle(&mut self, normalized: f32) -> Result<(), &'static str> {
        let value = normalized.clamp(-1.0, 1.0);
        self.current_throttle = value;

        let pulse_us = Self::normalized_to_pulse(
            value,
            self.config.throttle_min,
            self.config.throttle_neutral,
            self.config.throttle_max,
        );
        let duty = Self::pulse_to_duty_cycle(pulse_us);

        self.throttle_pwm
            .set_duty_cycle(duty)
            .map_err(|_| "throttle PWM error")?;

        Ok(())
    }

    fn steering(&self) -> f32 {
        self.current_steering
    }

    fn throttle(&self) -> f32 {
        self.current_throttle
    }
}
