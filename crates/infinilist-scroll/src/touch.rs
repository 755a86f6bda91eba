#![forbid(unsafe_code)]

//! Touch input as seen by the scroll bridge.
//!
//! Providers translate whatever the platform delivers (touch events, mouse
//! drags, recorded scripts) into [`TouchEvent`]s. The bridge polls them once
//! per animation frame and forwards them to the physics engine; recognizing
//! gestures is the engine's job.

use web_time::Instant;

/// One contact point, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Phase of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A touch sample with its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Active contact points. Empty for `End` and `Cancel`.
    pub touches: Vec<TouchPoint>,
    pub at: Instant,
}

impl TouchEvent {
    pub fn start(point: TouchPoint, at: Instant) -> Self {
        Self {
            phase: TouchPhase::Start,
            touches: vec![point],
            at,
        }
    }

    pub fn moved(point: TouchPoint, at: Instant) -> Self {
        Self {
            phase: TouchPhase::Move,
            touches: vec![point],
            at,
        }
    }

    pub fn end(at: Instant) -> Self {
        Self {
            phase: TouchPhase::End,
            touches: Vec::new(),
            at,
        }
    }

    pub fn cancel(at: Instant) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            touches: Vec::new(),
            at,
        }
    }
}

/// A source of touch input.
pub trait TouchInputProvider {
    /// Start listening. Called once when the list attaches.
    fn connect(&mut self) {}

    /// Next pending event, if any.
    fn poll(&mut self) -> Option<TouchEvent>;

    /// Stop listening. Called once when the list detaches.
    fn disconnect(&mut self) {}
}

/// Provider for hosts without touch input (scrolling is programmatic only).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTouch;

impl TouchInputProvider for NoTouch {
    fn poll(&mut self) -> Option<TouchEvent> {
        None
    }
}
