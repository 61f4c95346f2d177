//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod capture;
pub mod gpio;
pub mod pwm;
pub mod timer;

// Re-export trait interfaces
pub use capture::CaptureInterface;
pub use gpio::{GpioInterface, GpioMode};
pub use pwm::{PwmConfig, PwmInterface};
pub use timer::TimerInterface;
