//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the rover
//! needs: pulse capture on the RC input pin, PWM output for the servo and
//! ESC, GPIO for the status LED, and a monotonic timer. All hardware-specific
//! code lives behind these traits.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{CaptureInterface, GpioInterface, PwmInterface, TimerInterface};
