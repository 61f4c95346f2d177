//! Timer interface trait

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for timing and
/// delays. The time source must be monotonic (never goes backwards) with
/// microsecond precision; the watchdog depends on it.
pub trait TimerInterface {
    /// Delay for at least `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Delay for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Get current monotonic time in microseconds since platform init
    fn now_us(&self) -> u64;

    /// Get current monotonic time in milliseconds since platform init
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
