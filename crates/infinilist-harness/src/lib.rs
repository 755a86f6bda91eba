#![forbid(unsafe_code)]

//! Test harness for infinilist.
//!
//! - [`HeadlessHost`]: an in-memory [`Host`](infinilist_core::Host) that
//!   records every call, keeps merged element styles, and tracks live
//!   surfaces.
//! - [`ScriptedTouch`] / [`TouchScript`]: a touch provider fed from the test
//!   while the list owns it.
//! - [`FrameClock`]: deterministic animation-frame timestamps.
//! - [`WindowSnapshot`]: a comparable, hashable capture of the rendered
//!   window.

pub mod clock;
pub mod headless;
pub mod snapshot;
pub mod touch_script;

pub use clock::FrameClock;
pub use headless::{HeadlessHost, HeadlessSurface, HostCall};
pub use snapshot::{LayerSnapshot, WindowSnapshot};
pub use touch_script::{ScriptedTouch, TouchScript};
