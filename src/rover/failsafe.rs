//! Failsafe watchdog
//!
//! Dead-man's switch for RC input: tracks the time of the last successfully
//! decoded frame and reports expiry once valid input has been absent for the
//! configured timeout. The check is level-triggered; callers evaluate it
//! every loop iteration and keep forcing the safe state while it holds.
//! Recovery happens only through a new successful decode feeding the timer.

/// Failsafe configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailsafeError {
    /// Timeout must be non-zero
    InvalidTimeout,
}

/// Failsafe timing configuration
#[derive(Debug, Clone, Copy)]
pub struct FailsafeConfig {
    /// Time without a valid frame before outputs are forced neutral (µs)
    pub timeout_us: u64,
}

impl Default for FailsafeConfig {
    fn default() -> Self {
        Self {
            timeout_us: 500_000, // 0.5 s
        }
    }
}

impl FailsafeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FailsafeError> {
        if self.timeout_us == 0 {
            return Err(FailsafeError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Watchdog over the time since the last valid frame
#[derive(Debug)]
pub struct FailsafeWatchdog {
    timeout_us: u64,
    last_valid_us: u64,
}

impl FailsafeWatchdog {
    /// Create a new watchdog, treating `now_us` as the last valid instant
    ///
    /// Starting "fed" gives the receiver one full timeout to produce its
    /// first frame after power-on before the failsafe engages.
    pub fn new(config: FailsafeConfig, now_us: u64) -> Self {
        Self {
            timeout_us: config.timeout_us,
            last_valid_us: now_us,
        }
    }

    /// Record a successfully decoded frame
    pub fn feed(&mut self, now_us: u64) {
        self.last_valid_us = now_us;
    }

    /// Time since the last valid frame (µs)
    pub fn elapsed_us(&self, now_us: u64) -> u64 {
        now_us.saturating_sub(self.last_valid_us)
    }

    /// Whether the timeout has elapsed without a valid frame
    pub fn expired(&self, now_us: u64) -> bool {
        self.elapsed_us(now_us) > self.timeout_us
    }
}
