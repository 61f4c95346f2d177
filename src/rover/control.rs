//! Channel-to-control mapping policy
//!
//! Maps one decoded frame of normalized channel values into a steering and
//! throttle command. Channel 2 selects the operating mode:
//!
//! - below 0.33: **Raw** - direct steering and throttle pass-through
//! - below 0.66: **SteerAssist** - throttle reduced proportionally to how far
//!   the steering command is from center, to keep traction in sharp turns
//! - otherwise: **Unmapped** - no new output is computed and the previously
//!   issued output stays in effect

use crate::libraries::srv_channel::STEERING_RANGE_DEG;

/// Channel assignment: throttle stick
pub const THROTTLE_CHANNEL: usize = 0;
/// Channel assignment: steering stick
pub const STEERING_CHANNEL: usize = 1;
/// Channel assignment: three-position mode switch
pub const MODE_CHANNEL: usize = 2;

/// Center value of a normalized channel
pub const CHANNEL_NEUTRAL: f32 = 0.5;

/// Mode selector values below this pick Raw
const RAW_MODE_MAX: f32 = 0.33;
/// Mode selector values below this (and at or above `RAW_MODE_MAX`) pick SteerAssist
const STEER_ASSIST_MODE_MAX: f32 = 0.66;

/// Maximum fraction of throttle removed at full steering lock
const TURN_REDUCTION_GAIN: f32 = 0.7;

/// Operating mode selected by the mode channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Direct pass-through of steering and throttle
    Raw,
    /// Throttle scaled down with steering deflection
    SteerAssist,
    /// Mode switch in its third position: hold the last issued output
    Unmapped,
}

impl ControlMode {
    /// Select the mode from the normalized mode-channel value
    pub fn from_selector(value: f32) -> Self {
        if value < RAW_MODE_MAX {
            ControlMode::Raw
        } else if value < STEER_ASSIST_MODE_MAX {
            ControlMode::SteerAssist
        } else {
            ControlMode::Unmapped
        }
    }

    /// Mode name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ControlMode::Raw => "Raw",
            ControlMode::SteerAssist => "SteerAssist",
            ControlMode::Unmapped => "Unmapped",
        }
    }
}

/// One steering and throttle command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlOutput {
    /// Steering servo angle in degrees (0 to 180, 90 = straight ahead)
    pub steering_deg: f32,
    /// Normalized throttle (-1.0 reverse, 0.0 stop, +1.0 forward)
    pub throttle: f32,
}

impl ControlOutput {
    /// Safe output: wheels straight, motor stopped
    pub const NEUTRAL: Self = Self {
        steering_deg: STEERING_RANGE_DEG / 2.0,
        throttle: 0.0,
    };
}

/// Map one decoded frame into a control output
///
/// Returns the selected mode and, unless the mode is `Unmapped`, the new
/// output. Channels missing from a short slice read as center (0.5), matching
/// the pre-first-frame channel state.
pub fn map_frame(channels: &[f32]) -> (ControlMode, Option<ControlOutput>) {
    let ch = |index: usize| channels.get(index).copied().unwrap_or(CHANNEL_NEUTRAL);

    let mode = ControlMode::from_selector(ch(MODE_CHANNEL));
    let steering_deg = ch(STEERING_CHANNEL) * STEERING_RANGE_DEG;
    let raw_throttle = (ch(THROTTLE_CHANNEL) - CHANNEL_NEUTRAL) * 2.0;

    let output = match mode {
        ControlMode::Raw => Some(ControlOutput {
            steering_deg,
            throttle: raw_throttle,
        }),
        ControlMode::SteerAssist => {
            let deflection = ch(STEERING_CHANNEL) - CHANNEL_NEUTRAL;
            let deflection_mag = if deflection < 0.0 { -deflection } else { deflection };
            let turn_reduction_strength = TURN_REDUCTION_GAIN * 2.0 * deflection_mag;
            let turn_reduction_factor = 1.0 - turn_reduction_strength;
            Some(ControlOutput {
                steering_deg,
                throttle: raw_throttle * turn_reduction_factor,
            })
        }
        ControlMode::Unmapped => None,
    };

    (mode, output)
}
