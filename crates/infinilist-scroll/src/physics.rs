#![forbid(unsafe_code)]

//! The contract an external scroll-physics engine fulfils.
//!
//! The engine owns the scroll position. It is told the viewport and content
//! sizes, receives touch samples and programmatic scroll requests, and
//! reports every position change through the installed [`ScrollListener`].
//! Engines with their own timer can ignore [`ScrollPhysics::advance`];
//! frame-driven engines step their animation there.

use web_time::Instant;

use crate::touch::TouchPoint;

/// Called with `(left, top)` whenever the scroll position changes.
pub type ScrollListener = Box<dyn FnMut(f64, f64)>;

/// Viewport and content sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDimensions {
    pub client_width: f64,
    pub client_height: f64,
    pub content_width: f64,
    pub content_height: f64,
}

impl ScrollDimensions {
    /// Largest reachable `(left, top)`.
    pub fn max_scroll(&self) -> (f64, f64) {
        (
            (self.content_width - self.client_width).max(0.0),
            (self.content_height - self.client_height).max(0.0),
        )
    }
}

/// A momentum/touch physics engine.
pub trait ScrollPhysics {
    /// Install the position-changed callback, replacing any previous one.
    fn set_listener(&mut self, listener: ScrollListener);

    /// Update viewport and content sizes.
    fn set_dimensions(&mut self, dimensions: ScrollDimensions);

    /// Scroll to a position; `animate` selects eased over immediate motion.
    fn scroll_to(&mut self, left: f64, top: f64, animate: bool);

    fn touch_start(&mut self, touches: &[TouchPoint], at: Instant);

    fn touch_move(&mut self, touches: &[TouchPoint], at: Instant);

    fn touch_end(&mut self, at: Instant);

    /// Step any running animation to `now`.
    fn advance(&mut self, _now: Instant) {}
}
