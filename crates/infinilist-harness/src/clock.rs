#![forbid(unsafe_code)]

//! Deterministic frame timestamps.

use web_time::{Duration, Instant};

/// One healthy 60 fps frame.
pub const FRAME_60FPS: Duration = Duration::from_micros(16_667);

/// Monotone clock advanced explicitly by tests.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    now: Instant,
    step: Duration,
}

impl FrameClock {
    /// A clock starting now that advances by one 60 fps frame per
    /// [`next_frame`](Self::next_frame).
    pub fn new() -> Self {
        Self::with_step(FRAME_60FPS)
    }

    pub fn with_step(step: Duration) -> Self {
        Self {
            now: Instant::now(),
            step,
        }
    }

    #[inline]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advance by the frame step and return the new time.
    pub fn next_frame(&mut self) -> Instant {
        self.now += self.step;
        self.now
    }

    /// Advance by `by` (e.g. to simulate a stalled frame).
    pub fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
