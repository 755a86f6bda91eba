#![forbid(unsafe_code)]

//! Scroll/physics bridge for infinilist.
//!
//! Momentum, bouncing, and easing live in an external engine behind
//! [`ScrollPhysics`]. Touch input arrives from a pluggable
//! [`TouchInputProvider`], so the same engine runs against a browser, a
//! windowing toolkit, or a scripted test harness. [`ScrollBridge`] wires the
//! two together and exposes the latest vertical offset to the list.
//!
//! [`ImmediateScroller`] is a reference engine without momentum: drags move
//! the content 1:1 and programmatic scrolls jump. It is the default engine
//! and the one the harness tests run against.

pub mod bridge;
pub mod immediate;
pub mod physics;
pub mod touch;

pub use bridge::ScrollBridge;
pub use immediate::ImmediateScroller;
pub use physics::{ScrollDimensions, ScrollListener, ScrollPhysics};
pub use touch::{NoTouch, TouchEvent, TouchInputProvider, TouchPhase, TouchPoint};
