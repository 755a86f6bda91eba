#![forbid(unsafe_code)]

//! Adapter between a physics engine and the windowing engine.
//!
//! The bridge installs a listener on the engine that records the latest
//! `(left, top)` plus a "changed" flag. The list polls the flag once per
//! tick ([`ScrollBridge::take_changed`]) and schedules a render when it is
//! set, so physics callbacks never mutate list state directly.
//!
//! Touch input is pumped on the list's tick: every pending event from the
//! connected provider is dispatched to the engine, then the engine is
//! advanced to the frame timestamp.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

use crate::physics::{ScrollDimensions, ScrollPhysics};
use crate::touch::{TouchInputProvider, TouchPhase};

#[derive(Debug, Clone, Copy, Default)]
struct Position {
    left: f64,
    top: f64,
    changed: bool,
}

/// Owns the physics engine and the touch provider for one list.
pub struct ScrollBridge {
    physics: Box<dyn ScrollPhysics>,
    touch: Option<Box<dyn TouchInputProvider>>,
    position: Rc<Cell<Position>>,
    dimensions: ScrollDimensions,
}

impl std::fmt::Debug for ScrollBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.position.get();
        f.debug_struct("ScrollBridge")
            .field("left", &position.left)
            .field("top", &position.top)
            .field("connected", &self.touch.is_some())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

impl ScrollBridge {
    /// Wrap `physics`, installing the position listener.
    pub fn new(mut physics: Box<dyn ScrollPhysics>) -> Self {
        let position = Rc::new(Cell::new(Position::default()));
        let sink = Rc::clone(&position);
        physics.set_listener(Box::new(move |left, top| {
            sink.set(Position {
                left: finite_or_zero(left),
                top: finite_or_zero(top),
                changed: true,
            });
        }));
        Self {
            physics,
            touch: None,
            position,
            dimensions: ScrollDimensions::default(),
        }
    }

    /// Start receiving touch input from `provider`, replacing any previous one.
    pub fn connect(&mut self, mut provider: Box<dyn TouchInputProvider>) {
        self.disconnect();
        provider.connect();
        self.touch = Some(provider);
        tracing::debug!(target: "infinilist.scroll", "touch provider connected");
    }

    /// Stop receiving touch input.
    pub fn disconnect(&mut self) {
        if let Some(mut provider) = self.touch.take() {
            provider.disconnect();
            tracing::debug!(target: "infinilist.scroll", "touch provider disconnected");
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.touch.is_some()
    }

    /// Forward viewport and content sizes to the engine.
    pub fn set_dimensions(&mut self, dimensions: ScrollDimensions) {
        self.dimensions = dimensions;
        self.physics.set_dimensions(dimensions);
    }

    #[inline]
    pub fn dimensions(&self) -> ScrollDimensions {
        self.dimensions
    }

    /// Scroll vertically to `top`.
    pub fn scroll_to(&mut self, top: f64, animate: bool) {
        self.physics.scroll_to(0.0, top, animate);
    }

    /// Dispatch pending touch input and advance the engine to `now`.
    ///
    /// Returns the number of touch events dispatched.
    pub fn pump(&mut self, now: Instant) -> usize {
        let mut dispatched = 0;
        if let Some(provider) = self.touch.as_mut() {
            while let Some(event) = provider.poll() {
                match event.phase {
                    TouchPhase::Start => self.physics.touch_start(&event.touches, event.at),
                    TouchPhase::Move => self.physics.touch_move(&event.touches, event.at),
                    TouchPhase::End | TouchPhase::Cancel => self.physics.touch_end(event.at),
                }
                dispatched += 1;
            }
        }
        if dispatched > 0 {
            tracing::trace!(target: "infinilist.scroll", dispatched, "touch events dispatched");
        }
        self.physics.advance(now);
        dispatched
    }

    /// Latest vertical offset reported by the engine.
    #[inline]
    pub fn top(&self) -> f64 {
        self.position.get().top
    }

    /// Latest horizontal offset reported by the engine.
    #[inline]
    pub fn left(&self) -> f64 {
        self.position.get().left
    }

    /// Report and clear the "position changed" flag.
    pub fn take_changed(&self) -> bool {
        let mut position = self.position.get();
        let changed = position.changed;
        position.changed = false;
        self.position.set(position);
        changed
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
