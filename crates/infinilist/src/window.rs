#![forbid(unsafe_code)]

//! Visible-range computation.
//!
//! Given the scroll offset `t` and viewport height `h`, the first visible
//! item is `index_at(t)` and the last is `index_at(t + h)`. The bottom edge
//! is inclusive: an item whose top sits exactly at `t + h` is rendered.
//! Without more pages the last index is clamped to `count - 1`; with more
//! pages a last index of `count` means the load-more row is exposed.
//!
//! # Invariants
//!
//! 1. `top <= end <= count`.
//! 2. Every `i` in `top..end` satisfies `table[i] <= t + h` and
//!    `table[i + 1] > t`.
//! 3. `wants_more` implies `has_more` and `end == count`.

use std::ops::Range;

use infinilist_core::HeightTable;

/// The items that should be bound to layers for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First visible item.
    pub top: usize,
    /// One past the last visible item (never above the item count).
    pub end: usize,
    /// The viewport reaches past the last known item and more pages exist.
    pub wants_more: bool,
}

impl VisibleRange {
    /// Compute the range for offset `offset` in a viewport of height
    /// `viewport_height`.
    pub fn compute(
        table: &HeightTable,
        offset: f64,
        viewport_height: f64,
        has_more: bool,
    ) -> Self {
        let count = table.item_count();
        let top = table.index_at(offset);
        let bottom = table.index_at(offset + viewport_height.max(0.0));
        let end = (bottom + 1).min(count);
        Self {
            top: top.min(end),
            end,
            wants_more: has_more && bottom >= count,
        }
    }

    /// Item indices in the range.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.top..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == self.end
    }

    /// One past the highest index a bound layer may keep: the load-more
    /// row sits at `end` while it is wanted.
    #[inline]
    pub fn keep_end(&self) -> usize {
        if self.wants_more { self.end + 1 } else { self.end }
    }
}
