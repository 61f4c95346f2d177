//! Pulse capture interface trait
//!
//! The RC receiver outputs a PPM pulse train on one digital pin. The capture
//! peripheral timestamps consecutive edges and stores the edge-to-edge
//! durations (microseconds) in a bounded FIFO buffer that this trait exposes.
//!
//! The buffer is filled asynchronously by the capture hardware while the
//! decoder is the only consumer. Consumers must bracket any multi-entry read
//! with `pause()`/`resume()` so the hardware cannot overwrite the buffer
//! mid-read; that bracket is the entire synchronization discipline required.

/// Pulse capture interface trait
///
/// Platform implementations must provide this interface for edge-duration
/// capture on the RC input pin.
///
/// Buffer ordering is FIFO by capture time: `peek_front()` and `pop_front()`
/// always operate on the oldest captured duration.
pub trait CaptureInterface {
    /// Buffer capacity in durations
    ///
    /// For an 8-channel PPM frame captured edge-to-edge this is 18 entries
    /// (two per channel plus the sync gap pair).
    fn capacity(&self) -> usize;

    /// Number of buffered durations
    fn len(&self) -> usize;

    /// Check whether the buffer is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look at the oldest buffered duration without removing it
    fn peek_front(&self) -> Option<u16>;

    /// Remove and return the oldest buffered duration
    fn pop_front(&mut self) -> Option<u16>;

    /// Stop capturing new edges
    ///
    /// Already-buffered durations remain readable. Idempotent.
    fn pause(&mut self);

    /// Resume capturing new edges. Idempotent.
    fn resume(&mut self);

    /// Check whether capture is currently paused
    fn is_paused(&self) -> bool;

    /// Discard all buffered durations
    fn clear(&mut self);
}
