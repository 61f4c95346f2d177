//! Rover control loop
//!
//! Ties the frame decoder, control policy, and failsafe watchdog together
//! around one [`step`](Rover::step) call per loop iteration:
//!
//! 1. Attempt a decode; on success map the channels, drive the actuators,
//!    feed the watchdog, and show the alive indicator.
//! 2. Evaluate the watchdog regardless of decode outcome; while it is
//!    expired, force neutral outputs and show the failsafe indicator.
//!
//! The watchdog evaluation runs every iteration even when the decoder is
//! stuck searching or waiting for a frame, so a dead receiver can never
//! starve the failsafe. All state lives in the `Rover` context object and
//! collaborators are injected, so the whole loop runs against mocks on the
//! host.

use crate::libraries::indicator::IndicatorInterface;
use crate::libraries::ppm_decoder::{FrameDecoder, PpmConfig};
use crate::libraries::srv_channel::ActuatorInterface;
use crate::platform::traits::CaptureInterface;
use crate::rover::control::{self, ControlMode, ControlOutput};
use crate::rover::failsafe::{FailsafeConfig, FailsafeWatchdog};

#[cfg(feature = "embassy")]
use embassy_time::{Duration, Instant, Ticker};

/// Rover configuration: PPM timing plus failsafe timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct RoverConfig {
    /// PPM decoder timing
    pub ppm: PpmConfig,
    /// Failsafe watchdog timing
    pub failsafe: FailsafeConfig,
}

/// Rover control-loop context
///
/// Owns the decoder and watchdog state; borrows the actuator and indicator
/// collaborators for its lifetime.
pub struct Rover<'a> {
    decoder: FrameDecoder,
    watchdog: FailsafeWatchdog,
    actuators: &'a mut dyn ActuatorInterface,
    indicator: &'a mut dyn IndicatorInterface,
    mode: ControlMode,
    last_output: ControlOutput,
    in_failsafe: bool,
}

impl<'a> Rover<'a> {
    /// Create a new rover context
    ///
    /// `now_us` seeds the watchdog so the receiver gets one full timeout to
    /// deliver its first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the PPM timing or failsafe configuration is
    /// invalid.
    pub fn new(
        config: RoverConfig,
        actuators: &'a mut dyn ActuatorInterface,
        indicator: &'a mut dyn IndicatorInterface,
        now_us: u64,
    ) -> Result<Self, &'static str> {
        config
            .failsafe
            .validate()
            .map_err(|_| "invalid failsafe timeout")?;
        let decoder = FrameDecoder::new(config.ppm).map_err(|_| "invalid PPM timing config")?;

        Ok(Self {
            decoder,
            watchdog: FailsafeWatchdog::new(config.failsafe, now_us),
            actuators,
            indicator,
            mode: ControlMode::Unmapped,
            last_output: ControlOutput::NEUTRAL,
            in_failsafe: false,
        })
    }

    /// Currently selected control mode
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Last output issued to the actuators
    pub fn last_output(&self) -> ControlOutput {
        self.last_output
    }

    /// Whether the failsafe currently holds the outputs at neutral
    pub fn in_failsafe(&self) -> bool {
        self.in_failsafe
    }

    /// Run one control-loop iteration
    ///
    /// `now_us` is the current monotonic time. The call is a bounded
    /// computation with no suspension points.
    pub fn step(
        &mut self,
        capture: &mut dyn CaptureInterface,
        now_us: u64,
    ) -> Result<(), &'static str> {
        if let Some(channels) = self.decoder.poll(capture) {
            let (mode, output) = control::map_frame(&channels);
            if mode != self.mode {
                crate::log_info!("control mode changed to {}", mode.name());
                self.mode = mode;
            }
            if let Some(output) = output {
                self.apply(output)?;
            }

            // The watchdog resets on every decoded frame, Unmapped included
            self.watchdog.feed(now_us);
            self.indicator.set_alive()?;
            if self.in_failsafe {
                crate::log_info!("RC input recovered");
                self.in_failsafe = false;
            }
        }

        if self.watchdog.expired(now_us) {
            if !self.in_failsafe {
                crate::log_warn!(
                    "RC input lost ({} us since last frame), forcing neutral",
                    self.watchdog.elapsed_us(now_us)
                );
                self.in_failsafe = true;
            }
            // Level-triggered: re-force neutral on every expired iteration
            self.apply(ControlOutput::NEUTRAL)?;
            self.indicator.set_failsafe()?;
        }

        Ok(())
    }

    /// Drive the control loop from a periodic ticker
    #[cfg(feature = "embassy")]
    pub async fn run(&mut self, capture: &mut dyn CaptureInterface, period: Duration) -> ! {
        crate::log_info!("rover control loop started");
        let mut ticker = Ticker::every(period);
        loop {
            let now_us = Instant::now().as_micros();
            if let Err(e) = self.step(capture, now_us) {
                crate::log_error!("control step failed: {}", e);
            }
            ticker.next().await;
        }
    }

    fn apply(&mut self, output: ControlOutput) -> Result<(), &'static str> {
        self.actuators.set_steering(output.steering_deg)?;
        self.actuators.set_throttle(output.throttle)?;
        self.last_output = output;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::ppm_decoder::{FRAME_PULSES, PPM_CHANNELS};
    use crate::platform::mock::{MockCapture, MockTimer};
    use crate::platform::traits::TimerInterface;

    const EPSILON: f32 = 0.01;

    /// Minimal actuator stub recording the last commands
    struct MockActuators {
        steering_deg: f32,
        throttle: f32,
    }

    impl MockActuators {
        fn new() -> Self {
            Self {
                steering_deg: 90.0,
                throttle: 0.0,
            }
        }
    }

    impl ActuatorInterface for MockActuators {
        fn set_steering(&mut self, angle_deg: f32) -> Result<(), &'static str> {
            self.steering_deg = angle_deg;
            Ok(())
        }

        fn set_throttle(&mut self, normalized: f32) -> Result<(), &'static str> {
            self.throttle = normalized;
            Ok(())
        }

        fn steering(&self) -> f32 {
            self.steering_deg
        }

        fn throttle(&self) -> f32 {
            self.throttle
        }
    }

    /// Indicator stub counting state changes
    #[derive(Default)]
    struct MockIndicator {
        alive_count: u32,
        failsafe_count: u32,
    }

    impl IndicatorInterface for MockIndicator {
        fn set_alive(&mut self) -> Result<(), &'static str> {
            self.alive_count += 1;
            Ok(())
        }

        fn set_failsafe(&mut self) -> Result<(), &'static str> {
            self.failsafe_count += 1;
            Ok(())
        }
    }

    fn make_frame(throttle: f32, steering: f32, mode: f32) -> [u16; FRAME_PULSES] {
        let mut values = [0.5_f32; PPM_CHANNELS];
        values[0] = throttle;
        values[1] = steering;
        values[2] = mode;

        let mut frame = [0u16; FRAME_PULSES];
        frame[0] = 5000;
        frame[1] = 400;
        for (i, v) in values.iter().enumerate() {
            let sum = 986 + (v * 1024.0) as u16;
            frame[2 + 2 * i] = sum / 2;
            frame[2 + 2 * i + 1] = sum - sum / 2;
        }
        frame
    }

    #[test]
    fn test_raw_frame_drives_actuators() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        capture.feed_all(&make_frame(0.75, 0.5, 0.1));

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();
        rover.step(&mut capture, 1000).unwrap();

        assert_eq!(rover.mode(), ControlMode::Raw);
        assert!((rover.last_output().steering_deg - 90.0).abs() < 1.0);
        assert!((rover.last_output().throttle - 0.5).abs() < EPSILON);
        assert!(!rover.in_failsafe());

        drop(rover);
        assert_eq!(indicator.alive_count, 1);
        assert_eq!(indicator.failsafe_count, 0);
        assert!((actuators.throttle - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_steer_assist_frame_reduces_throttle() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        capture.feed_all(&make_frame(1.0, 1.0, 0.5));

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();
        rover.step(&mut capture, 1000).unwrap();

        assert_eq!(rover.mode(), ControlMode::SteerAssist);
        assert!((rover.last_output().steering_deg - 180.0).abs() < 1.0);
        assert!((rover.last_output().throttle - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_unmapped_frame_holds_previous_output() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();

        capture.feed_all(&make_frame(0.75, 0.5, 0.1));
        rover.step(&mut capture, 1000).unwrap();
        let previous = rover.last_output();

        // Mode switch to the third position: output must not change
        capture.feed_all(&make_frame(1.0, 1.0, 0.9));
        rover.step(&mut capture, 2000).unwrap();

        assert_eq!(rover.mode(), ControlMode::Unmapped);
        assert_eq!(rover.last_output(), previous);
        assert!(!rover.in_failsafe());
    }

    #[test]
    fn test_watchdog_not_triggered_before_timeout() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();

        capture.feed_all(&make_frame(0.75, 0.5, 0.1));
        rover.step(&mut capture, 0).unwrap();

        // 0.49 s with no input: output unchanged
        rover.step(&mut capture, 490_000).unwrap();
        assert!(!rover.in_failsafe());
        assert!((rover.last_output().throttle - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_watchdog_forces_neutral_after_timeout() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();
        let mut timer = MockTimer::new();

        let mut rover = Rover::new(
            RoverConfig::default(),
            &mut actuators,
            &mut indicator,
            timer.now_us(),
        )
        .unwrap();

        capture.feed_all(&make_frame(0.75, 0.5, 0.1));
        rover.step(&mut capture, timer.now_us()).unwrap();

        // 0.51 s with no input: forced neutral, and held on every iteration
        timer.advance_us(510_000);
        rover.step(&mut capture, timer.now_us()).unwrap();
        assert!(rover.in_failsafe());
        assert_eq!(rover.last_output(), ControlOutput::NEUTRAL);

        timer.advance_us(10_000);
        rover.step(&mut capture, timer.now_us()).unwrap();
        timer.advance_us(10_000);
        rover.step(&mut capture, timer.now_us()).unwrap();
        assert!(rover.in_failsafe());

        drop(rover);
        assert_eq!(indicator.failsafe_count, 3);
        assert_eq!(actuators.throttle, 0.0);
        assert!((actuators.steering_deg - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_watchdog_triggers_while_decoder_starved() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        // Noise keeps the decoder in Searching; the watchdog must still fire
        capture.feed_all(&[800, 900, 1000]);

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();
        rover.step(&mut capture, 600_000).unwrap();

        assert!(rover.in_failsafe());
        assert_eq!(rover.last_output(), ControlOutput::NEUTRAL);
    }

    #[test]
    fn test_recovery_after_failsafe() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();

        rover.step(&mut capture, 600_000).unwrap();
        assert!(rover.in_failsafe());

        // New valid frame: watchdog resets and control resumes
        capture.feed_all(&make_frame(1.0, 0.5, 0.1));
        rover.step(&mut capture, 700_000).unwrap();

        assert!(!rover.in_failsafe());
        assert!((rover.last_output().throttle - 1.0).abs() < EPSILON);

        drop(rover);
        assert_eq!(indicator.alive_count, 1);
    }

    #[test]
    fn test_capture_resumed_after_each_decode() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();
        let mut capture = MockCapture::new();

        let mut rover =
            Rover::new(RoverConfig::default(), &mut actuators, &mut indicator, 0).unwrap();

        for i in 0..3u64 {
            capture.feed_all(&make_frame(0.75, 0.5, 0.1));
            rover.step(&mut capture, i * 20_000).unwrap();
        }

        assert_eq!(capture.pause_count(), 3);
        assert_eq!(capture.resume_count(), 3);
        assert!(!capture.is_paused());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut actuators = MockActuators::new();
        let mut indicator = MockIndicator::default();

        let mut config = RoverConfig::default();
        config.failsafe.timeout_us = 0;
        assert!(Rover::new(config, &mut actuators, &mut indicator, 0).is_err());

        let mut config = RoverConfig::default();
        config.ppm.scale_us = 0;
        assert!(Rover::new(config, &mut actuators, &mut indicator, 0).is_err());
    }
}
