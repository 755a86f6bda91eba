#![forbid(unsafe_code)]

//! Host boundary: the visual tree the list renders into.
//!
//! The engine never touches a real element. It asks the [`Host`] for
//! surfaces, positions them through [`Surface::apply_style`], and styles the
//! three fixed elements every list owns:
//!
//! ```text
//! Root (relative, overflow hidden, viewport-sized)
//! ├── Content (absolute; translated by -scroll_offset)
//! │   ├── surface  (one per recycled layer)
//! │   └── ...
//! └── Scrollbar (absolute, right edge)
//! ```
//!
//! A host also owns two pieces of plumbing: resize notifications and the
//! animation-frame primitive. The engine only toggles them; the host calls
//! back into the list (`handle_resize`, `tick`) when they fire.

use crate::geometry::Size;
use crate::style::ElementStyle;

/// The fixed elements created by [`Host::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostElement {
    /// The clipping container sized to the viewport.
    Root,
    /// The translated parent of every layer surface.
    Content,
    /// The scroll position indicator.
    Scrollbar,
}

impl HostElement {
    /// Stable name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Content => "content",
            Self::Scrollbar => "scrollbar",
        }
    }
}

/// A drawable surface owned by a layer.
///
/// Renderers receive `&mut Surface` and paint into it; the engine only
/// positions it.
pub trait Surface {
    /// Apply the set fields of `style` to this surface.
    fn apply_style(&mut self, style: &ElementStyle);

    /// Replace the surface content with plain text.
    fn set_text(&mut self, text: &str);
}

/// The visual tree a list is attached to.
pub trait Host {
    /// Surface type handed to layers and renderers.
    type Surface: Surface;

    /// Current client size of the element the list is attached to.
    fn viewport(&self) -> Size;

    /// Create the root, content, and scrollbar elements.
    fn mount(&mut self);

    /// Remove the root element (and with it every surface) from the tree.
    fn unmount(&mut self);

    /// Create a new surface as a child of the content element.
    fn create_surface(&mut self) -> Self::Surface;

    /// Remove a surface from the tree permanently.
    fn destroy_surface(&mut self, surface: Self::Surface);

    /// Apply a style to one of the fixed elements.
    fn apply_style(&mut self, element: HostElement, style: &ElementStyle);

    /// Enable or disable viewport resize notifications.
    fn set_resize_listener(&mut self, enabled: bool);

    /// Ask for one more animation-frame callback.
    fn request_animation_frame(&mut self);
}
