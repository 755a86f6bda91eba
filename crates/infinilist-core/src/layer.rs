#![forbid(unsafe_code)]

//! A reusable rendering surface bound to at most one item.
//!
//! A [`Layer`]'s identity is its surface, not its index: the same layer is
//! rebound to many items over the life of a list. The engine reads
//! [`Layer::index`] and [`Layer::type_id`] to diff state; renderers paint into
//! [`Layer::surface_mut`].
//!
//! # Invariants
//!
//! 1. A bound layer's `offset()` is the height-table offset of its index
//!    (the engine passes it in; the layer never computes it).
//! 2. `attach` always restyles the surface: width, height, and translation.
//! 3. The type identifier survives `unbind`, so the pool can file the layer
//!    under the type its content was last painted for.

use crate::style::{Dimension, ElementStyle, Overflow, Position, Transform};
use crate::host::Surface;

/// Height of a bound layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerHeight {
    /// Fixed height in pixels.
    Px(f64),
    /// Sized by content (used for the trailing load-more row).
    Auto,
}

impl From<LayerHeight> for Dimension {
    fn from(height: LayerHeight) -> Self {
        match height {
            LayerHeight::Px(px) => Dimension::Px(px),
            LayerHeight::Auto => Dimension::Auto,
        }
    }
}

/// One recycled rendering surface.
#[derive(Debug)]
pub struct Layer<S> {
    surface: S,
    index: Option<usize>,
    type_id: Option<String>,
    offset: f64,
    width: f64,
    height: LayerHeight,
    visible: bool,
}

impl<S: Surface> Layer<S> {
    /// Wrap a freshly created surface. The surface is absolutely positioned
    /// at the content origin and clipped to its own box.
    pub fn new(mut surface: S) -> Self {
        surface.apply_style(
            &ElementStyle::new()
                .position(Position::Absolute)
                .top(Dimension::Px(0.0))
                .left(Dimension::Px(0.0))
                .overflow(Overflow::Hidden),
        );
        Self {
            surface,
            index: None,
            type_id: None,
            offset: 0.0,
            width: 0.0,
            height: LayerHeight::Auto,
            visible: true,
        }
    }

    /// Bind this layer to `index` and reposition its surface.
    ///
    /// Returns `true` when `type_id` differs from the type the layer was
    /// last bound to, i.e. the surface content is stale and must be fully
    /// repainted.
    pub fn attach(
        &mut self,
        index: usize,
        offset: f64,
        width: f64,
        height: LayerHeight,
        type_id: &str,
    ) -> bool {
        let stale = self.type_id.as_deref() != Some(type_id);
        if stale {
            self.type_id = Some(type_id.to_owned());
        }
        self.index = Some(index);
        self.offset = offset;
        self.width = width;
        self.height = height;
        self.surface.apply_style(
            &ElementStyle::new()
                .width(Dimension::Px(width))
                .height(height.into())
                .transform(Transform::translate_y(offset)),
        );
        stale
    }

    /// Show or hide the surface without removing it from the tree.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.surface.apply_style(&ElementStyle::new().visible(visible));
        }
    }
}

impl<S> Layer<S> {
    /// Drop the item binding. The type identifier is kept.
    pub fn unbind(&mut self) {
        self.index = None;
    }

    /// Index of the bound item, `None` while pooled.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.index.is_some()
    }

    /// Type identifier of the content last painted into this layer.
    #[inline]
    pub fn type_id(&self) -> Option<&str> {
        self.type_id.as_deref()
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> LayerHeight {
        self.height
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give up the layer, returning its surface for destruction.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        style: ElementStyle,
        applied: usize,
    }

    impl Surface for Recorder {
        fn apply_style(&mut self, style: &ElementStyle) {
            self.style.merge(style);
            self.applied += 1;
        }

        fn set_text(&mut self, _text: &str) {}
    }

    #[test]
    fn new_layer_is_unbound_and_absolutely_positioned() {
        let layer = Layer::new(Recorder::default());
        assert_eq!(layer.index(), None);
        assert_eq!(layer.type_id(), None);
        assert_eq!(layer.surface().style.position, Some(Position::Absolute));
        assert_eq!(layer.surface().style.overflow, Some(Overflow::Hidden));
    }

    #[test]
    fn attach_positions_surface() {
        let mut layer = Layer::new(Recorder::default());
        layer.attach(3, 120.0, 300.0, LayerHeight::Px(40.0), "row");

        assert_eq!(layer.index(), Some(3));
        assert_eq!(layer.offset(), 120.0);
        let style = &layer.surface().style;
        assert_eq!(style.width, Some(Dimension::Px(300.0)));
        assert_eq!(style.height, Some(Dimension::Px(40.0)));
        assert_eq!(style.transform, Some(Transform::translate_y(120.0)));
    }

    #[test]
    fn attach_reports_stale_on_type_change() {
        let mut layer = Layer::new(Recorder::default());
        assert!(layer.attach(0, 0.0, 10.0, LayerHeight::Px(1.0), "a"), "first bind is stale");
        assert!(!layer.attach(1, 1.0, 10.0, LayerHeight::Px(1.0), "a"));
        assert!(layer.attach(2, 2.0, 10.0, LayerHeight::Px(1.0), "b"));
        assert_eq!(layer.type_id(), Some("b"));
    }

    #[test]
    fn auto_height_maps_to_auto_dimension() {
        let mut layer = Layer::new(Recorder::default());
        layer.attach(10, 400.0, 100.0, LayerHeight::Auto, "$LoadMore");
        assert_eq!(layer.surface().style.height, Some(Dimension::Auto));
        assert_eq!(layer.height(), LayerHeight::Auto);
    }

    #[test]
    fn unbind_keeps_type() {
        let mut layer = Layer::new(Recorder::default());
        layer.attach(4, 0.0, 1.0, LayerHeight::Px(1.0), "card");
        layer.unbind();
        assert!(!layer.is_bound());
        assert_eq!(layer.type_id(), Some("card"));
    }

    #[test]
    fn set_visible_only_restyles_on_change() {
        let mut layer = Layer::new(Recorder::default());
        let before = layer.surface().applied;
        layer.set_visible(true);
        assert_eq!(layer.surface().applied, before);
        layer.set_visible(false);
        assert_eq!(layer.surface().applied, before + 1);
        assert_eq!(layer.surface().style.visible, Some(false));
    }
}
