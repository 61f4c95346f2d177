//! Mock pulse capture implementation for testing

use crate::platform::traits::CaptureInterface;
use heapless::Deque;

/// Capacity of the mock capture buffer (8-channel PPM frame, edge capture)
pub const MOCK_CAPTURE_CAPACITY: usize = 18;

/// Mock pulse capture implementation
///
/// Tests feed synthetic edge durations with [`feed`](MockCapture::feed) and
/// the decoder consumes them through [`CaptureInterface`]. Pause, resume, and
/// clear calls are counted so tests can verify the snapshot bracket.
pub struct MockCapture {
    queue: Deque<u16, MOCK_CAPTURE_CAPACITY>,
    paused: bool,
    pause_count: u32,
    resume_count: u32,
    clear_count: u32,
}

impl Default for MockCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCapture {
    /// Create a new mock capture buffer (running, empty)
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
            paused: false,
            pause_count: 0,
            resume_count: 0,
            clear_count: 0,
        }
    }

    /// Simulate the hardware capturing one edge duration
    ///
    /// Returns false if the duration was dropped because capture is paused
    /// or the buffer is full, mirroring real capture hardware.
    pub fn feed(&mut self, duration_us: u16) -> bool {
        if self.paused {
            return false;
        }
        self.queue.push_back(duration_us).is_ok()
    }

    /// Feed a slice of durations in capture order
    pub fn feed_all(&mut self, durations: &[u16]) {
        for &d in durations {
            self.feed(d);
        }
    }

    /// Number of times `pause()` was called
    pub fn pause_count(&self) -> u32 {
        self.pause_count
    }

    /// Number of times `resume()` was called
    pub fn resume_count(&self) -> u32 {
        self.resume_count
    }

    /// Number of times `clear()` was called
    pub fn clear_count(&self) -> u32 {
        self.clear_count
    }
}

impl CaptureInterface for MockCapture {
    fn capacity(&self) -> usize {
        MOCK_CAPTURE_CAPACITY
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn peek_front(&self) -> Option<u16> {
        self.queue.front().copied()
    }

    fn pop_front(&mut self) -> Option<u16> {
        self.queue.pop_front()
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pause_count += 1;
    }

    fn resume(&mut self) {
        self.paused = false;
        self.resume_count += 1;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.clear_count += 1;
    }
}
