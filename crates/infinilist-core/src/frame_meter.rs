#![forbid(unsafe_code)]

//! Rolling frames-per-second measurement.
//!
//! The meter counts animation frames and, once more than one sample window
//! (200 ms by default) has elapsed, replaces its estimate with
//! `frames / elapsed`, capped at `max_fps`. Between samples the previous
//! estimate stands, so a single slow frame cannot flip the budget decision
//! back and forth within a window.
//!
//! # Invariants
//!
//! 1. `fps()` starts at `max_fps` (a fresh list is assumed healthy).
//! 2. `fps()` never exceeds `max_fps`.
//! 3. `is_over_budget()` is exactly `fps() < min_fps`.

use web_time::{Duration, Instant};

/// Configuration for [`FrameMeter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMeterConfig {
    /// Length of one sampling window. Default: 200ms.
    pub sample_window: Duration,
    /// Frame rate below which rendering is degraded. Default: 30.
    pub min_fps: f64,
    /// Cap applied to the estimate. Default: 60.
    pub max_fps: f64,
}

impl Default for FrameMeterConfig {
    fn default() -> Self {
        Self {
            sample_window: Duration::from_millis(200),
            min_fps: 30.0,
            max_fps: 60.0,
        }
    }
}

/// Frame-rate estimator driven by animation-frame timestamps.
#[derive(Debug, Clone)]
pub struct FrameMeter {
    config: FrameMeterConfig,
    window_start: Option<Instant>,
    frames: u32,
    fps: f64,
}

impl FrameMeter {
    pub fn new(config: FrameMeterConfig) -> Self {
        Self {
            config,
            window_start: None,
            frames: 0,
            fps: config.max_fps,
        }
    }

    /// Record one frame at `now`.
    ///
    /// The first call only opens the sampling window. Returns the new
    /// estimate when a window closed on this frame.
    pub fn record_frame(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };
        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed <= self.config.sample_window {
            return None;
        }
        self.fps = (f64::from(self.frames) / elapsed.as_secs_f64()).min(self.config.max_fps);
        self.window_start = Some(now);
        self.frames = 0;
        Some(self.fps)
    }

    /// Current estimate.
    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// True when the estimate is below `min_fps`.
    #[inline]
    pub fn is_over_budget(&self) -> bool {
        self.fps < self.config.min_fps
    }

    /// Forget the current window and assume a healthy frame rate again.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.frames = 0;
        self.fps = self.config.max_fps;
    }

    #[inline]
    pub fn config(&self) -> &FrameMeterConfig {
        &self.config
    }
}

impl Default for FrameMeter {
    fn default() -> Self {
        Self::new(FrameMeterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn starts_healthy() {
        let meter = FrameMeter::default();
        assert_eq!(meter.fps(), 60.0);
        assert!(!meter.is_over_budget());
    }

    #[test]
    fn first_frame_only_opens_window() {
        let mut meter = FrameMeter::default();
        assert_eq!(meter.record_frame(Instant::now()), None);
        assert_eq!(meter.fps(), 60.0);
    }

    #[test]
    fn steady_sixty_stays_capped() {
        let mut meter = FrameMeter::default();
        let mut now = Instant::now();
        meter.record_frame(now);
        for _ in 0..30 {
            now += FRAME;
            meter.record_frame(now);
        }
        assert!(meter.fps() <= 60.0);
        assert!(meter.fps() > 55.0, "fps = {}", meter.fps());
        assert!(!meter.is_over_budget());
    }

    #[test]
    fn long_frame_drops_below_budget() {
        let mut meter = FrameMeter::default();
        let start = Instant::now();
        meter.record_frame(start);
        let fps = meter.record_frame(start + Duration::from_millis(250));
        let fps = fps.expect("window closed");
        assert!((fps - 4.0).abs() < 1e-9, "1 frame / 250ms = 4fps, got {fps}");
        assert!(meter.is_over_budget());
    }

    #[test]
    fn estimate_holds_within_window() {
        let mut meter = FrameMeter::default();
        let start = Instant::now();
        meter.record_frame(start);
        meter.record_frame(start + Duration::from_millis(300));
        assert!(meter.is_over_budget());
        // Fast frames inside the next window do not change the estimate yet.
        assert_eq!(meter.record_frame(start + Duration::from_millis(316)), None);
        assert!(meter.is_over_budget());
    }

    #[test]
    fn recovers_after_a_window_of_fast_frames() {
        let mut meter = FrameMeter::default();
        let mut now = Instant::now();
        meter.record_frame(now);
        now += Duration::from_millis(300);
        meter.record_frame(now);
        assert!(meter.is_over_budget());
        for _ in 0..14 {
            now += FRAME;
            meter.record_frame(now);
        }
        assert!(!meter.is_over_budget(), "fps = {}", meter.fps());
    }

    #[test]
    fn reset_restores_max() {
        let mut meter = FrameMeter::default();
        let start = Instant::now();
        meter.record_frame(start);
        meter.record_frame(start + Duration::from_secs(1));
        assert!(meter.is_over_budget());
        meter.reset();
        assert_eq!(meter.fps(), 60.0);
    }
}
