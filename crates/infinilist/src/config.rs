#![forbid(unsafe_code)]

//! Caller-supplied data and paint callbacks.
//!
//! A [`ListConfig`] is the list's only view of the data: it never stores
//! items, it asks. Item count, heights and types are read on every
//! `refresh`; `has_more` is read on every render. Renderers receive the item
//! index and the layer's surface to paint into.
//!
//! ```rust,ignore
//! let config = ListConfig::new(move || rows.len(), |index, surface: &mut MySurface| {
//!         surface.set_text(&format!("row {index}"));
//!     })
//!     .with_item_height(|index| if index % 10 == 0 { 64.0 } else { 40.0 })
//!     .with_has_more(move || !exhausted.get())
//!     .with_page_fetcher(|count, done| spawn_fetch(count, done));
//! ```

use std::borrow::Cow;
use std::fmt;

use infinilist_core::Surface;

use crate::pagination::PageCompletion;
use crate::policy::ListPolicy;

/// Paints item `index` into a surface.
pub type Renderer<S> = Box<dyn FnMut(usize, &mut S)>;

/// Builder-style list configuration.
pub struct ListConfig<S> {
    items_count: Box<dyn Fn() -> usize>,
    item_renderer: Renderer<S>,
    item_height: Option<Box<dyn Fn(usize) -> f64>>,
    item_type: Option<Box<dyn Fn(usize) -> Cow<'static, str>>>,
    load_more_renderer: Option<Renderer<S>>,
    busy_renderer: Option<Renderer<S>>,
    has_more: Option<Box<dyn Fn() -> bool>>,
    page_fetcher: Option<Box<dyn FnMut(usize, PageCompletion)>>,
    policy: ListPolicy,
}

impl<S> fmt::Debug for ListConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConfig")
            .field("items_count", &(self.items_count)())
            .field("item_height", &self.item_height.is_some())
            .field("item_type", &self.item_type.is_some())
            .field("load_more_renderer", &self.load_more_renderer.is_some())
            .field("busy_renderer", &self.busy_renderer.is_some())
            .field("has_more", &self.has_more.is_some())
            .field("page_fetcher", &self.page_fetcher.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<S: Surface> ListConfig<S> {
    /// Configuration with the two required callbacks: the current item count
    /// and the real item renderer.
    pub fn new(
        items_count: impl Fn() -> usize + 'static,
        item_renderer: impl FnMut(usize, &mut S) + 'static,
    ) -> Self {
        Self {
            items_count: Box::new(items_count),
            item_renderer: Box::new(item_renderer),
            item_height: None,
            item_type: None,
            load_more_renderer: None,
            busy_renderer: None,
            has_more: None,
            page_fetcher: None,
            policy: ListPolicy::default(),
        }
    }

    /// Per-item height. Default: `policy.layout.default_item_height`.
    #[must_use]
    pub fn with_item_height(mut self, f: impl Fn(usize) -> f64 + 'static) -> Self {
        self.item_height = Some(Box::new(f));
        self
    }

    /// Per-item recycling key. Default: `""` for every item.
    #[must_use]
    pub fn with_item_type<T>(mut self, f: impl Fn(usize) -> T + 'static) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.item_type = Some(Box::new(move |index| f(index).into()));
        self
    }

    /// Painter for the trailing load-more row. Default: placeholder text.
    #[must_use]
    pub fn with_load_more_renderer(mut self, f: impl FnMut(usize, &mut S) + 'static) -> Self {
        self.load_more_renderer = Some(Box::new(f));
        self
    }

    /// Painter used instead of the item renderer while over frame budget.
    /// Default: placeholder text.
    #[must_use]
    pub fn with_busy_renderer(mut self, f: impl FnMut(usize, &mut S) + 'static) -> Self {
        self.busy_renderer = Some(Box::new(f));
        self
    }

    /// Whether more pages may exist past the current count. Default: `false`.
    #[must_use]
    pub fn with_has_more(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.has_more = Some(Box::new(f));
        self
    }

    /// Requests the next page; receives the current count and a completion
    /// handle to signal when the new items are available.
    #[must_use]
    pub fn with_page_fetcher(mut self, f: impl FnMut(usize, PageCompletion) + 'static) -> Self {
        self.page_fetcher = Some(Box::new(f));
        self
    }

    /// Replace the tunables.
    #[must_use]
    pub fn with_policy(mut self, policy: ListPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn policy(&self) -> &ListPolicy {
        &self.policy
    }

    pub(crate) fn items_count(&self) -> usize {
        (self.items_count)()
    }

    pub(crate) fn item_height(&self, index: usize) -> f64 {
        match &self.item_height {
            Some(f) => f(index),
            None => self.policy.layout.default_item_height,
        }
    }

    pub(crate) fn item_type(&self, index: usize) -> Cow<'static, str> {
        match &self.item_type {
            Some(f) => f(index),
            None => Cow::Borrowed(""),
        }
    }

    pub(crate) fn has_more(&self) -> bool {
        self.has_more.as_ref().is_some_and(|f| f())
    }

    pub(crate) fn paint_item(&mut self, index: usize, surface: &mut S) {
        (self.item_renderer)(index, surface);
    }

    pub(crate) fn paint_busy(&mut self, index: usize, surface: &mut S) {
        match self.busy_renderer.as_mut() {
            Some(f) => f(index, surface),
            None => surface.set_text(&self.policy.load_more.placeholder_text),
        }
    }

    pub(crate) fn paint_load_more(&mut self, index: usize, surface: &mut S) {
        match self.load_more_renderer.as_mut() {
            Some(f) => f(index, surface),
            None => surface.set_text(&self.policy.load_more.placeholder_text),
        }
    }

    /// Hand `completion` to the page fetcher. Returns `false` when none is
    /// configured.
    pub(crate) fn fetch_page(&mut self, count: usize, completion: PageCompletion) -> bool {
        match self.page_fetcher.as_mut() {
            Some(f) => {
                f(count, completion);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinilist_core::ElementStyle;

    #[derive(Default)]
    struct Text(String);

    impl Surface for Text {
        fn apply_style(&mut self, _style: &ElementStyle) {}

        fn set_text(&mut self, text: &str) {
            self.0 = text.to_owned();
        }
    }

    fn config() -> ListConfig<Text> {
        ListConfig::new(|| 5, |i, s: &mut Text| s.0 = format!("item {i}"))
    }

    #[test]
    fn defaults() {
        let c = config();
        assert_eq!(c.items_count(), 5);
        assert_eq!(c.item_height(3), 40.0);
        assert_eq!(c.item_type(3), "");
        assert!(!c.has_more());
    }

    #[test]
    fn default_placeholders_use_policy_text() {
        let mut policy = ListPolicy::default();
        policy.load_more.placeholder_text = "…".into();
        let mut c = config().with_policy(policy);
        let mut s = Text::default();
        c.paint_busy(0, &mut s);
        assert_eq!(s.0, "…");
        s.0.clear();
        c.paint_load_more(5, &mut s);
        assert_eq!(s.0, "…");
    }

    #[test]
    fn custom_callbacks_are_used() {
        let mut c = config()
            .with_item_height(|i| 10.0 * (i + 1) as f64)
            .with_item_type(|i| if i == 0 { "header" } else { "row" })
            .with_busy_renderer(|i, s: &mut Text| s.0 = format!("busy {i}"))
            .with_has_more(|| true);
        assert_eq!(c.item_height(2), 30.0);
        assert_eq!(c.item_type(0), "header");
        assert_eq!(c.item_type(1), "row");
        assert!(c.has_more());

        let mut s = Text::default();
        c.paint_item(4, &mut s);
        assert_eq!(s.0, "item 4");
        c.paint_busy(4, &mut s);
        assert_eq!(s.0, "busy 4");
    }

    #[test]
    fn fetch_without_fetcher_reports_false() {
        let mut c = config();
        let channel = crate::pagination::PageChannel::new();
        assert!(!c.fetch_page(5, channel.completion(5)));
    }

    #[test]
    fn item_type_accepts_owned_strings() {
        let c = config().with_item_type(|i| format!("kind-{}", i % 2));
        assert_eq!(c.item_type(3), "kind-1");
    }
}
