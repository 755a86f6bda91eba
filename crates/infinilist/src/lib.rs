#![forbid(unsafe_code)]

//! Windowed, layer-recycling infinite list.
//!
//! [`InfiniteList`] renders an arbitrarily long (possibly paginated) list
//! inside a fixed viewport by binding a small set of recycled
//! [`Layer`](infinilist_core::Layer)s to the items currently on screen.
//! The host drives it one animation frame at a time through
//! [`InfiniteList::tick`]; scrolling comes from a
//! [`ScrollPhysics`](infinilist_scroll::ScrollPhysics) engine fed by a
//! [`TouchInputProvider`](infinilist_scroll::TouchInputProvider).
//!
//! # Example
//!
//! ```rust,ignore
//! use infinilist::prelude::*;
//!
//! let config = ListConfig::new(|| 1_000, |index, surface: &mut MySurface| {
//!     surface.set_text(&format!("row {index}"));
//! });
//! let mut list = InfiniteList::new(config);
//! list.attach(host, Box::new(NoTouch))?;
//! loop {
//!     list.tick(Instant::now());
//! }
//! ```

pub mod backlog;
pub mod chrome;
pub mod config;
pub mod error;
pub mod list;
pub mod pagination;
pub mod policy;
pub mod scrollbar;
pub mod stats;
pub mod window;

pub use backlog::RerenderBacklog;
pub use config::{ListConfig, Renderer};
pub use error::ListError;
pub use list::{InfiniteList, ListState, TickOutcome};
pub use pagination::PageCompletion;
pub use policy::{
    BudgetPolicy, LOAD_MORE_TYPE, LayoutPolicy, ListPolicy, LoadMorePolicy, PolicyError,
    ScrollbarPolicy,
};
pub use scrollbar::ScrollbarMetrics;
pub use stats::RenderStats;
pub use window::VisibleRange;

pub use infinilist_core as core;
pub use infinilist_scroll as scroll;

/// Common imports for hosts embedding a list.
pub mod prelude {
    pub use crate::{
        InfiniteList, ListConfig, ListError, ListPolicy, ListState, PageCompletion, TickOutcome,
    };
    pub use infinilist_core::{
        ElementStyle, Host, HostElement, Layer, LayerHeight, Size, Surface,
    };
    pub use infinilist_scroll::{
        ImmediateScroller, NoTouch, ScrollPhysics, TouchEvent, TouchInputProvider, TouchPoint,
    };
    pub use web_time::{Duration, Instant};
}
