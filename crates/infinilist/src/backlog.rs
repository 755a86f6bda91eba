#![forbid(unsafe_code)]

//! Items painted with the placeholder renderer that still owe a real paint.
//!
//! While the frame rate is below budget, newly revealed items get the cheap
//! placeholder and their index is recorded here. Once the list is idle and
//! back within budget, one entry per tick is repainted, lowest index first,
//! bounding the catch-up cost per frame.

use std::collections::BTreeSet;

/// Ordered set of item indices awaiting a real paint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RerenderBacklog {
    pending: BTreeSet<usize>,
}

impl RerenderBacklog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` as placeholder-painted. Returns `false` if it was
    /// already pending.
    pub fn insert(&mut self, index: usize) -> bool {
        self.pending.insert(index)
    }

    /// Forget `index` (its layer left the window).
    pub fn remove(&mut self, index: usize) -> bool {
        self.pending.remove(&index)
    }

    /// Take the lowest pending index.
    pub fn pop_next(&mut self) -> Option<usize> {
        self.pending.pop_first()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending.iter().copied()
    }
}
