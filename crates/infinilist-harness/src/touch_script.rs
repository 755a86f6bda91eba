#![forbid(unsafe_code)]

//! Touch input driven from test code.
//!
//! The list takes ownership of its touch provider at attach, so the queue is
//! shared: the test keeps a [`TouchScript`] and pushes gestures into it; the
//! [`ScriptedTouch`] handed to the list drains it on every pump.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use infinilist_scroll::{TouchEvent, TouchInputProvider, TouchPoint};
use web_time::Instant;

#[derive(Debug, Default)]
struct Shared {
    queue: VecDeque<TouchEvent>,
    connected: bool,
    delivered: usize,
}

/// Provider half, owned by the list.
#[derive(Debug)]
pub struct ScriptedTouch {
    shared: Rc<RefCell<Shared>>,
}

/// Test half, used to enqueue gestures.
#[derive(Debug, Clone)]
pub struct TouchScript {
    shared: Rc<RefCell<Shared>>,
}

impl ScriptedTouch {
    /// A connected pair.
    pub fn pair() -> (Self, TouchScript) {
        let shared = Rc::new(RefCell::new(Shared::default()));
        (
            Self {
                shared: Rc::clone(&shared),
            },
            TouchScript { shared },
        )
    }

    /// Boxed provider ready for `attach`, plus the script handle.
    pub fn boxed() -> (Box<dyn TouchInputProvider>, TouchScript) {
        let (touch, script) = Self::pair();
        (Box::new(touch), script)
    }
}

impl TouchInputProvider for ScriptedTouch {
    fn connect(&mut self) {
        self.shared.borrow_mut().connected = true;
    }

    fn poll(&mut self) -> Option<TouchEvent> {
        let mut shared = self.shared.borrow_mut();
        let event = shared.queue.pop_front()?;
        shared.delivered += 1;
        Some(event)
    }

    fn disconnect(&mut self) {
        self.shared.borrow_mut().connected = false;
    }
}

impl TouchScript {
    pub fn push(&self, event: TouchEvent) {
        self.shared.borrow_mut().queue.push_back(event);
    }

    /// A vertical drag from `from_y` to `to_y` in `steps` moves, finger
    /// lifted at the end.
    pub fn drag(&self, from_y: f64, to_y: f64, steps: usize, at: Instant) {
        let steps = steps.max(1);
        self.push(TouchEvent::start(TouchPoint::new(0.0, from_y), at));
        for step in 1..=steps {
            let y = from_y + (to_y - from_y) * step as f64 / steps as f64;
            self.push(TouchEvent::moved(TouchPoint::new(0.0, y), at));
        }
        self.push(TouchEvent::end(at));
    }

    pub fn is_connected(&self) -> bool {
        self.shared.borrow().connected
    }

    /// Events not yet polled.
    pub fn pending(&self) -> usize {
        self.shared.borrow().queue.len()
    }

    /// Events polled so far.
    pub fn delivered(&self) -> usize {
        self.shared.borrow().delivered
    }
}
