#![forbid(unsafe_code)]

//! Prefix sums over per-item heights.
//!
//! Entry `i` of the table is the total height of items `[0, i)`, so the
//! table has `item_count + 1` entries and entry 0 is always 0. The table is
//! rebuilt wholesale whenever the item count or any height changes; there is
//! no incremental patching.
//!
//! # Lookup
//!
//! [`HeightTable::index_at`] maps a vertical position to the item covering
//! it: the smallest `i` with `table[i + 1] > y`. Because the table is
//! monotone this is a `partition_point` (binary search).
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Negative or NaN height | Treated as 0 (keeps the table monotone) |
//! | `y` past the end | Returns `item_count()` |
//! | `offset_of` past the end | Returns `total()` |

/// Monotone prefix-sum table of item heights.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightTable {
    prefix: Vec<f64>,
}

impl HeightTable {
    /// A table with no items.
    pub fn new() -> Self {
        Self { prefix: vec![0.0] }
    }

    /// Build a table for `count` items, asking `height_of` for each.
    pub fn build(count: usize, mut height_of: impl FnMut(usize) -> f64) -> Self {
        let mut prefix = Vec::with_capacity(count + 1);
        let mut acc = 0.0;
        prefix.push(acc);
        for index in 0..count {
            acc += sanitize(height_of(index));
            prefix.push(acc);
        }
        Self { prefix }
    }

    /// Build a table where every item has the same height.
    pub fn uniform(count: usize, height: f64) -> Self {
        let height = sanitize(height);
        Self::build(count, |_| height)
    }

    /// Number of items covered by the table.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Number of entries (`item_count() + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// True when the table covers no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Total height of every item.
    #[inline]
    pub fn total(&self) -> f64 {
        self.prefix[self.prefix.len() - 1]
    }

    /// Vertical offset of the top edge of `index`.
    #[inline]
    pub fn offset_of(&self, index: usize) -> f64 {
        self.prefix
            .get(index)
            .copied()
            .unwrap_or_else(|| self.total())
    }

    /// Height of item `index`, if it exists.
    pub fn height_of(&self, index: usize) -> Option<f64> {
        let end = self.prefix.get(index + 1)?;
        Some(end - self.prefix[index])
    }

    /// The item covering vertical position `y`: the smallest `i` such that
    /// `table[i + 1] > y`, or `item_count()` when `y` is past the end.
    pub fn index_at(&self, y: f64) -> usize {
        self.prefix[1..].partition_point(|&end| end <= y)
    }

    /// The raw prefix sums.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prefix
    }
}

impl Default for HeightTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn sanitize(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
