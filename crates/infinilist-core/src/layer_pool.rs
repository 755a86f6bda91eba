#![forbid(unsafe_code)]

//! Recycling pool of unbound layers, keyed by type identifier.
//!
//! Layers scrolled out of the window are parked here instead of being
//! destroyed, and are handed back out when an item of the same type scrolls
//! in. Keying by type means a recycled surface usually already has the right
//! structure and only needs its content refreshed.
//!
//! # Invariants
//!
//! 1. Every pooled layer is unbound (`index() == None`) and hidden.
//! 2. A layer is either in the pool or owned by the caller, never both
//!    (enforced by move semantics: `release` takes the layer by value).
//! 3. `borrow` returns the most recently released layer of the type.
//! 4. A layer released with [`ReleaseMode::Discard`] is never stored; it is
//!    handed back so the caller can destroy its surface.

use ahash::AHashMap;

use crate::host::Surface;
use crate::layer::Layer;
use crate::logging::trace;

/// What to do with a released layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Hide the layer and keep it for reuse.
    Keep,
    /// Drop the layer permanently (its bound geometry is invalid).
    Discard,
}

/// Pool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Successful borrows (a pooled layer was reused).
    pub borrows: u64,
    /// Borrow attempts that found no layer of the requested type.
    pub misses: u64,
    /// Layers parked for reuse.
    pub releases: u64,
    /// Layers released for destruction.
    pub discards: u64,
}

/// Type-keyed pool of unbound layers.
#[derive(Debug)]
pub struct LayerPool<S> {
    layers: AHashMap<String, Vec<Layer<S>>>,
    stats: PoolStats,
}

impl<S: Surface> LayerPool<S> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            layers: AHashMap::new(),
            stats: PoolStats::default(),
        }
    }

    /// Take a pooled layer of `type_id`, making its surface visible again.
    ///
    /// `None` means the caller must construct a new layer.
    pub fn borrow(&mut self, type_id: &str) -> Option<Layer<S>> {
        match self.layers.get_mut(type_id).and_then(Vec::pop) {
            Some(mut layer) => {
                layer.set_visible(true);
                self.stats.borrows += 1;
                Some(layer)
            }
            None => {
                self.stats.misses += 1;
                trace!(target: "infinilist.pool", type_id, "pool miss");
                None
            }
        }
    }

    /// Return a layer to the pool.
    ///
    /// With [`ReleaseMode::Keep`] the layer is unbound, hidden, and filed
    /// under its type identifier; `None` is returned. With
    /// [`ReleaseMode::Discard`] the unbound layer is returned so the caller
    /// can destroy its surface.
    #[must_use = "a discarded layer must be destroyed by the caller"]
    pub fn release(&mut self, mut layer: Layer<S>, mode: ReleaseMode) -> Option<Layer<S>> {
        layer.unbind();
        match mode {
            ReleaseMode::Keep => {
                layer.set_visible(false);
                let key = layer.type_id().unwrap_or_default().to_owned();
                self.layers.entry(key).or_default().push(layer);
                self.stats.releases += 1;
                None
            }
            ReleaseMode::Discard => {
                self.stats.discards += 1;
                trace!(
                    target: "infinilist.pool",
                    type_id = layer.type_id().unwrap_or_default(),
                    "layer discarded"
                );
                Some(layer)
            }
        }
    }
}

impl<S> LayerPool<S> {
    /// Total pooled layers across all types.
    pub fn len(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    /// Pooled layers available for `type_id`.
    pub fn available(&self, type_id: &str) -> usize {
        self.layers.get(type_id).map_or(0, Vec::len)
    }

    /// Iterate over every pooled layer (no particular order).
    pub fn iter(&self) -> impl Iterator<Item = &Layer<S>> {
        self.layers.values().flatten()
    }

    /// Remove every pooled layer, e.g. before the host is torn down.
    pub fn drain(&mut self) -> impl Iterator<Item = Layer<S>> + '_ {
        self.layers.drain().flat_map(|(_, layers)| layers)
    }

    #[inline]
    pub fn stats(&self) -> PoolStats {
        self.stats
    }
}

impl<S: Surface> Default for LayerPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerHeight;
    use crate::style::ElementStyle;

    #[derive(Debug, Default)]
    struct Tagged {
        id: u32,
        hidden: bool,
    }

    impl Surface for Tagged {
        fn apply_style(&mut self, style: &ElementStyle) {
            if let Some(v) = style.visible {
                self.hidden = !v;
            }
        }

        fn set_text(&mut self, _text: &str) {}
    }

    fn bound(id: u32, index: usize, type_id: &str) -> Layer<Tagged> {
        let mut layer = Layer::new(Tagged { id, hidden: false });
        layer.attach(index, 0.0, 10.0, LayerHeight::Px(10.0), type_id);
        layer
    }

    #[test]
    fn borrow_from_empty_pool_misses() {
        let mut pool: LayerPool<Tagged> = LayerPool::new();
        assert!(pool.borrow("row").is_none());
        assert_eq!(pool.stats().misses, 1);
    }

    #[test]
    fn released_layer_is_unbound_hidden_and_reusable() {
        let mut pool = LayerPool::new();
        assert!(pool.release(bound(7, 3, "row"), ReleaseMode::Keep).is_none());
        assert_eq!(pool.len(), 1);

        let parked = pool.iter().next().unwrap();
        assert!(!parked.is_bound());
        assert!(parked.surface().hidden);

        let layer = pool.borrow("row").unwrap();
        assert_eq!(layer.surface().id, 7);
        assert!(!layer.surface().hidden, "borrow re-shows the surface");
        assert!(pool.is_empty());
    }

    #[test]
    fn borrow_is_keyed_by_type() {
        let mut pool = LayerPool::new();
        let _ = pool.release(bound(1, 0, "header"), ReleaseMode::Keep);
        assert!(pool.borrow("row").is_none());
        assert_eq!(pool.available("header"), 1);
        assert_eq!(pool.borrow("header").unwrap().surface().id, 1);
    }

    #[test]
    fn borrow_returns_most_recent_release() {
        let mut pool = LayerPool::new();
        let _ = pool.release(bound(1, 0, ""), ReleaseMode::Keep);
        let _ = pool.release(bound(2, 1, ""), ReleaseMode::Keep);
        assert_eq!(pool.borrow("").unwrap().surface().id, 2);
        assert_eq!(pool.borrow("").unwrap().surface().id, 1);
    }

    #[test]
    fn discard_hands_layer_back_without_pooling() {
        let mut pool = LayerPool::new();
        let discarded = pool.release(bound(9, 5, "row"), ReleaseMode::Discard);
        let layer = discarded.expect("discard returns the layer");
        assert!(!layer.is_bound());
        assert!(pool.is_empty());
        assert_eq!(pool.stats().discards, 1);
        assert_eq!(pool.stats().releases, 0);
    }

    #[test]
    fn drain_empties_all_types() {
        let mut pool = LayerPool::new();
        let _ = pool.release(bound(1, 0, "a"), ReleaseMode::Keep);
        let _ = pool.release(bound(2, 1, "b"), ReleaseMode::Keep);
        let mut ids: Vec<u32> = pool.drain().map(|l| l.surface().id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert!(pool.is_empty());
    }
}
