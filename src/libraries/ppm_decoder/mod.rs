//! PPM frame decoder
//!
//! This module turns the raw edge-to-edge durations captured on the RC
//! receiver pin into normalized channel values, including:
//! - Frame synchronization on the long inter-frame gap
//! - Stale-pulse trimming while searching for a frame boundary
//! - Channel normalization (pulse pair sum → 0.0 to 1.0)
//!
//! The capture hardware timestamps both rising and falling edges, so each
//! channel occupies two consecutive buffer entries whose sum is the channel
//! period. A full 8-channel frame is therefore 18 entries: the sync gap, one
//! companion edge, and 8 duration pairs.
//!
//! A frame is always decoded once the buffer is full; out-of-range sums are
//! clamped to [0.0, 1.0] rather than rejected so the control loop never
//! stalls on malformed input. Staleness is the watchdog's job, not the
//! decoder's.

use crate::platform::traits::CaptureInterface;
use heapless::Vec;

/// Number of channels in one PPM frame
pub const PPM_CHANNELS: usize = 8;

/// Durations per frame: two edges per channel plus the sync gap pair
pub const FRAME_PULSES: usize = 2 * PPM_CHANNELS + 2;

/// Buffer entries occupied by the sync gap and its companion edge
const SYNC_PULSES: usize = 2;

/// Normalized channel values for one decoded frame, each in [0.0, 1.0]
pub type ChannelVector = [f32; PPM_CHANNELS];

/// PPM timing configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Normalization scale must be non-zero
    InvalidScale,
    /// Sync threshold must exceed the longest valid channel pulse
    InvalidSyncThreshold,
}

/// PPM timing configuration
///
/// Defaults match a standard 8-channel receiver: channel pulse pairs sum to
/// 986-2010 µs and frames are separated by a gap well above 3000 µs.
#[derive(Debug, Clone, Copy)]
pub struct PpmConfig {
    /// Durations at or above this value are treated as an inter-frame gap (µs)
    pub sync_threshold_us: u16,
    /// Pulse pair sum corresponding to a channel value of 0.0 (µs)
    pub baseline_us: u16,
    /// Pulse pair range covering the full 0.0 to 1.0 span (µs)
    pub scale_us: u16,
}

impl Default for PpmConfig {
    fn default() -> Self {
        Self {
            sync_threshold_us: 3000,
            baseline_us: 986,
            scale_us: 1024,
        }
    }
}

impl PpmConfig {
    /// Validate the configuration
    ///
    /// A sync gap must be distinguishable from the longest channel pulse,
    /// so the threshold has to sit above `baseline_us + scale_us`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale_us == 0 {
            return Err(ConfigError::InvalidScale);
        }
        if self.sync_threshold_us <= self.baseline_us.saturating_add(self.scale_us) {
            return Err(ConfigError::InvalidSyncThreshold);
        }
        Ok(())
    }
}

/// Frame synchronization state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Trimming stale pulses until the buffer head is a sync gap
    Searching,
    /// Synchronized, waiting for the buffer to fill with one frame
    Synced,
}

/// PPM frame decoder state machine
///
/// Call [`poll`](FrameDecoder::poll) once per control-loop iteration. Most
/// calls return `None` (still synchronizing or still filling); a full buffer
/// decodes into a [`ChannelVector`].
pub struct FrameDecoder {
    config: PpmConfig,
    state: DecoderState,
}

impl FrameDecoder {
    /// Create a new frame decoder
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the timing configuration is inconsistent.
    pub fn new(config: PpmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: DecoderState::Searching,
        })
    }

    /// Current synchronization state
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Attempt one decode step
    ///
    /// While searching, leading durations below the sync threshold are
    /// discarded; they are channel pulses from a prior, now-irrelevant frame.
    /// Once the buffer head is a genuine inter-frame gap, the decoder waits
    /// for a full frame, then snapshots and decodes it.
    ///
    /// On a successful decode the capture buffer is cleared, capture is
    /// resumed, and the decoder returns to `Searching` for the next frame.
    pub fn poll(&mut self, capture: &mut dyn CaptureInterface) -> Option<ChannelVector> {
        if self.state == DecoderState::Searching {
            while let Some(head) = capture.peek_front() {
                if head >= self.config.sync_threshold_us {
                    self.state = DecoderState::Synced;
                    break;
                }
                capture.pop_front();
            }
        }

        if self.state == DecoderState::Synced && capture.len() >= FRAME_PULSES {
            let channels = self.decode_frame(capture);
            self.state = DecoderState::Searching;
            return Some(channels);
        }

        None
    }

    /// Snapshot the full buffer and decode it into channel values
    ///
    /// Capture is paused for the duration of the read so the hardware cannot
    /// overwrite entries mid-decode (a torn read), then cleared and resumed.
    fn decode_frame(&self, capture: &mut dyn CaptureInterface) -> ChannelVector {
        capture.pause();

        let mut pulses: Vec<u16, FRAME_PULSES> = Vec::new();
        while let Some(duration) = capture.pop_front() {
            if pulses.push(duration).is_err() {
                break;
            }
        }

        let mut channels = [0.0_f32; PPM_CHANNELS];
        for (channel, pair) in pulses[SYNC_PULSES..].chunks_exact(2).enumerate() {
            let sum = pair[0] as i32 + pair[1] as i32;
            let adjusted = sum - self.config.baseline_us as i32;
            let normalized = adjusted as f32 / self.config.scale_us as f32;
            channels[channel] = normalized.clamp(0.0, 1.0);
        }

        capture.clear();
        capture.resume();

        channels
    }
}
