#![forbid(unsafe_code)]

//! Core: recycled layers, the layer pool, prefix-sum heights, and the host
//! boundary.
//!
//! # Role in infinilist
//! `infinilist-core` owns everything the windowing engine manipulates that
//! is not policy: the [`Layer`] surface handle, the [`LayerPool`] that
//! recycles layers by type identifier, the [`HeightTable`] used to map scroll
//! offsets to item indices, and the [`FrameMeter`] that samples frame rate.
//!
//! # How it fits in the system
//! The engine (`infinilist`) drives these types once per animation frame.
//! Hosts implement [`Host`] and [`Surface`] to map element styles onto a real
//! visual tree (DOM, GPU quads, terminal cells, or a headless recorder).

pub mod frame_meter;
pub mod geometry;
pub mod height_table;
pub mod host;
pub mod layer;
pub mod layer_pool;
pub mod logging;
pub mod style;

pub use frame_meter::{FrameMeter, FrameMeterConfig};
pub use geometry::Size;
pub use height_table::HeightTable;
pub use host::{Host, HostElement, Surface};
pub use layer::{Layer, LayerHeight};
pub use layer_pool::{LayerPool, PoolStats, ReleaseMode};
pub use style::{Dimension, ElementStyle, Overflow, Position, Transform};
