#![forbid(unsafe_code)]

//! Scrollbar thumb geometry.
//!
//! The thumb height is the viewport's share of the list height, floored to
//! whole pixels and never smaller than the policy minimum. Its offset maps
//! the scroll position onto the track left over below the thumb.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Content fits in the viewport | Thumb fills the track, offset 0 |
//! | Zero or negative list height | Same as content that fits |
//! | Viewport shorter than the minimum thumb | Thumb is the viewport height |

use infinilist_core::{Dimension, ElementStyle, Transform};

/// Thumb height and offset for one render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarMetrics {
    pub height: f64,
    pub offset: f64,
}

impl ScrollbarMetrics {
    /// Compute the thumb for a viewport of height `viewport`, a list of
    /// height `list_height` scrolled to `scroll_offset`.
    pub fn compute(viewport: f64, list_height: f64, scroll_offset: f64, min_thumb: f64) -> Self {
        let viewport = viewport.max(0.0);
        if viewport == 0.0 {
            return Self::default();
        }
        if list_height <= viewport {
            return Self {
                height: viewport,
                offset: 0.0,
            };
        }
        let height = (viewport / list_height * viewport)
            .floor()
            .max(min_thumb)
            .min(viewport);
        let track = viewport - height;
        let offset = (scroll_offset / (list_height - viewport) * track)
            .floor()
            .clamp(0.0, track);
        Self { height, offset }
    }

    /// Per-render style: height plus translation.
    pub fn style(&self) -> ElementStyle {
        ElementStyle::new()
            .height(Dimension::Px(self.height))
            .transform(Transform::translate_y(self.offset))
    }
}
