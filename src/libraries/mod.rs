//! Reusable vehicle libraries
//!
//! Building blocks shared by vehicle logic: PPM frame decoding, the actuator
//! abstraction for the steering servo and throttle ESC, and the status
//! indicator light.

pub mod indicator;
pub mod ppm_decoder;
pub mod srv_channel;

// Re-export commonly used types
pub use indicator::{DualColorLed, IndicatorInterface};
pub use ppm_decoder::{ChannelVector, DecoderState, FrameDecoder, PpmConfig};
pub use srv_channel::{ActuatorConfig, ActuatorInterface, Actuators};
