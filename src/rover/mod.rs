//! Rover vehicle logic
//!
//! This module contains the rover-specific control logic:
//!
//! - `control`: mapping from decoded channel values to steering and throttle
//! - `failsafe`: the dead-man's-switch watchdog
//! - `vehicle`: the control loop tying decoder, policy, and watchdog together

pub mod control;
pub mod failsafe;
pub mod vehicle;

// Re-export commonly used types
pub use control::{ControlMode, ControlOutput};
pub use failsafe::{FailsafeConfig, FailsafeWatchdog};
pub use vehicle::{Rover, RoverConfig};
