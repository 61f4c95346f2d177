//! Mock timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock timer implementation
///
/// Simulated monotonic time; delays advance the clock instead of sleeping,
/// and tests can jump time forward with [`advance_us`](MockTimer::advance_us)
/// to exercise timeout paths.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated time by `us` microseconds
    pub fn advance_us(&mut self, us: u64) {
        self.now_us = self.now_us.wrapping_add(us);
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
