#![forbid(unsafe_code)]

//! Element style helpers.
//!
//! An [`ElementStyle`] is a sparse set of declarations: every field is
//! optional and `None` means "leave the current value alone". Hosts apply a
//! style by overwriting only the fields that are set, which keeps the per-frame
//! mutation down to the transform and the occasional size change.
//!
//! Positioning uses [`Transform`] rather than `top`/`left` so a web host can
//! emit a `matrix3d` and keep each surface on its own compositing layer.
//!
//! # Invariants
//!
//! 1. `a.merge(&b)` yields a style where every field set in `b` wins.
//! 2. `to_css()` emits declarations in a fixed order, so equal styles
//!    always serialize identically.
//! 3. Numbers are emitted without a trailing `.0` and `-0` is normalized to `0`.

use std::fmt;

/// A length that is either a pixel value or left to the host's layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Fixed size in pixels.
    Px(f64),
    /// Let the host size the element from its content.
    Auto,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", css_number(*v)),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// Positioning scheme of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

impl Position {
    /// CSS keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

/// Overflow behaviour of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

impl Overflow {
    /// CSS keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

/// A 2D translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
}

impl Transform {
    /// No translation.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Translate vertically only.
    #[inline]
    pub const fn translate_y(y: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: y,
        }
    }

    /// Serialize as a CSS `matrix3d(...)` value.
    pub fn to_css(&self) -> String {
        format!(
            "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,{},{},0,1)",
            css_number(self.translate_x),
            css_number(self.translate_y)
        )
    }
}

/// Sparse style declaration applied to a surface or a host element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    pub position: Option<Position>,
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub margin_right: Option<Dimension>,
    pub overflow: Option<Overflow>,
    pub opacity: Option<f64>,
    pub background_color: Option<String>,
    pub border_radius: Option<Dimension>,
    /// `Some(false)` hides the element without removing it from the tree.
    pub visible: Option<bool>,
    pub transform: Option<Transform>,
}

impl ElementStyle {
    /// An empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn top(mut self, top: Dimension) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn right(mut self, right: Dimension) -> Self {
        self.right = Some(right);
        self
    }

    #[must_use]
    pub fn bottom(mut self, bottom: Dimension) -> Self {
        self.bottom = Some(bottom);
        self
    }

    #[must_use]
    pub fn left(mut self, left: Dimension) -> Self {
        self.left = Some(left);
        self
    }

    #[must_use]
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn margin_right(mut self, margin: Dimension) -> Self {
        self.margin_right = Some(margin);
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set opacity (clamped to `[0, 1]`).
    #[must_use]
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn border_radius(mut self, radius: Dimension) -> Self {
        self.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `other` onto `self`: fields set in `other` replace ours.
    pub fn merge(&mut self, other: &ElementStyle) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }
        take!(
            position,
            top,
            right,
            bottom,
            left,
            width,
            height,
            margin_right,
            overflow,
            opacity,
            background_color,
            border_radius,
            visible,
            transform
        );
    }

    /// CSS property/value pairs in declaration order.
    pub fn to_css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(p) = self.position {
            out.push(("position", p.as_str().to_owned()));
        }
        let lengths = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
            ("margin-right", self.margin_right),
        ];
        for (name, value) in lengths {
            if let Some(v) = value {
                out.push((name, v.to_string()));
            }
        }
        if let Some(o) = self.overflow {
            out.push(("overflow", o.as_str().to_owned()));
        }
        if let Some(o) = self.opacity {
            out.push(("opacity", css_number(o)));
        }
        if let Some(c) = &self.background_color {
            out.push(("background-color", c.clone()));
        }
        if let Some(r) = self.border_radius {
            out.push(("border-radius", r.to_string()));
        }
        if let Some(v) = self.visible {
            out.push(("display", if v { "block" } else { "none" }.to_owned()));
        }
        if let Some(t) = self.transform {
            out.push(("transform", t.to_css()));
        }
        out
    }

    /// Serialize as an inline `style` attribute body.
    pub fn to_css(&self) -> String {
        self.to_css_declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn css_number(v: f64) -> String {
    // -0.0 would print as "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::Px(40.0).to_string(), "40px");
        assert_eq!(Dimension::Px(2.5).to_string(), "2.5px");
        assert_eq!(Dimension::Auto.to_string(), "auto");
    }

    #[test]
    fn transform_matches_matrix3d_layout() {
        assert_eq!(
            Transform::translate_y(-120.0).to_css(),
            "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,-120,0,1)"
        );
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(
            Transform::translate_y(-0.0).to_css(),
            "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1)"
        );
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let mut base = ElementStyle::new()
            .position(Position::Absolute)
            .height(Dimension::Px(10.0));
        base.merge(&ElementStyle::new().height(Dimension::Auto).visible(false));

        assert_eq!(base.position, Some(Position::Absolute));
        assert_eq!(base.height, Some(Dimension::Auto));
        assert_eq!(base.visible, Some(false));
    }

    #[test]
    fn css_serialization_is_ordered() {
        let style = ElementStyle::new()
            .transform(Transform::translate_y(5.0))
            .opacity(0.3)
            .position(Position::Relative)
            .overflow(Overflow::Hidden);
        assert_eq!(
            style.to_css(),
            "position: relative; overflow: hidden; opacity: 0.3; \
             transform: matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,5,0,1)"
        );
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(ElementStyle::new().opacity(3.0).opacity, Some(1.0));
        assert_eq!(ElementStyle::new().opacity(-1.0).opacity, Some(0.0));
    }

    #[test]
    fn empty_style() {
        assert!(ElementStyle::new().is_empty());
        assert!(!ElementStyle::new().visible(true).is_empty());
        assert_eq!(ElementStyle::new().to_css(), "");
    }
}
