#![forbid(unsafe_code)]

//! Momentum-free reference engine.
//!
//! Drags move the content exactly as far as the finger moved; programmatic
//! scrolls jump straight to the target. The `animate` flag of the last
//! [`ScrollPhysics::scroll_to`] call is recorded so callers can tell the two
//! request kinds apart, but no easing is applied.
//!
//! # Invariants
//!
//! 1. The position is always within `[0, max_scroll]` on both axes.
//! 2. The listener fires only when the position actually changes.
//! 3. Shrinking the content re-clamps the position (and notifies).

use web_time::Instant;

use crate::physics::{ScrollDimensions, ScrollListener, ScrollPhysics};
use crate::touch::TouchPoint;

#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    point: TouchPoint,
    left: f64,
    top: f64,
}

/// Scroll engine without momentum or easing.
pub struct ImmediateScroller {
    listener: Option<ScrollListener>,
    dimensions: ScrollDimensions,
    left: f64,
    top: f64,
    drag: Option<DragAnchor>,
    last_animate: Option<bool>,
}

impl std::fmt::Debug for ImmediateScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmediateScroller")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("dragging", &self.drag.is_some())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

impl ImmediateScroller {
    pub fn new() -> Self {
        Self {
            listener: None,
            dimensions: ScrollDimensions::default(),
            left: 0.0,
            top: 0.0,
            drag: None,
            last_animate: None,
        }
    }

    /// Current `(left, top)`.
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn dimensions(&self) -> ScrollDimensions {
        self.dimensions
    }

    /// `animate` flag of the most recent programmatic scroll.
    pub fn last_animate(&self) -> Option<bool> {
        self.last_animate
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn move_to(&mut self, left: f64, top: f64) {
        let (max_left, max_top) = self.dimensions.max_scroll();
        let left = clamp_axis(left, max_left);
        let top = clamp_axis(top, max_top);
        if left == self.left && top == self.top {
            return;
        }
        self.left = left;
        self.top = top;
        if let Some(listener) = self.listener.as_mut() {
            listener(left, top);
        }
    }
}

impl Default for ImmediateScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPhysics for ImmediateScroller {
    fn set_listener(&mut self, listener: ScrollListener) {
        self.listener = Some(listener);
    }

    fn set_dimensions(&mut self, dimensions: ScrollDimensions) {
        self.dimensions = dimensions;
        self.move_to(self.left, self.top);
    }

    fn scroll_to(&mut self, left: f64, top: f64, animate: bool) {
        self.last_animate = Some(animate);
        self.drag = None;
        self.move_to(left, top);
    }

    fn touch_start(&mut self, touches: &[TouchPoint], _at: Instant) {
        self.drag = touches.first().map(|&point| DragAnchor {
            point,
            left: self.left,
            top: self.top,
        });
    }

    fn touch_move(&mut self, touches: &[TouchPoint], _at: Instant) {
        let (Some(anchor), Some(point)) = (self.drag, touches.first()) else {
            return;
        };
        self.move_to(
            anchor.left + (anchor.point.x - point.x),
            anchor.top + (anchor.point.y - point.y),
        );
    }

    fn touch_end(&mut self, _at: Instant) {
        self.drag = None;
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
