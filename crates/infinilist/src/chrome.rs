#![forbid(unsafe_code)]

//! Styles for the three host elements the list owns.
//!
//! The root is the only relatively positioned element; content and
//! scrollbar are absolute children so moving them never triggers layout of
//! anything else.

use infinilist_core::{Dimension, ElementStyle, Overflow, Position, Size, Transform};

/// Root style applied once at attach.
pub fn root_style(viewport: Size) -> ElementStyle {
    let mut style = ElementStyle::new()
        .position(Position::Relative)
        .overflow(Overflow::Hidden);
    style.merge(&root_size_style(viewport));
    style
}

/// Root size, re-applied on every refresh.
pub fn root_size_style(viewport: Size) -> ElementStyle {
    ElementStyle::new()
        .width(Dimension::Px(viewport.width))
        .height(Dimension::Px(viewport.height))
}

/// Content element base style.
pub fn content_style() -> ElementStyle {
    ElementStyle::new()
        .position(Position::Absolute)
        .top(Dimension::Px(0.0))
        .bottom(Dimension::Px(0.0))
}

/// Content translation for scroll offset `offset`.
pub fn content_transform(offset: f64) -> ElementStyle {
    ElementStyle::new().transform(Transform::translate_y(-offset))
}
