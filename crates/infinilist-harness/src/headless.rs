#![forbid(unsafe_code)]

//! In-memory host.
//!
//! Every [`Host`] call is appended to a journal that can be dumped as JSONL
//! for failure triage. Element styles are merged the way a style attribute
//! would accumulate them, so tests can assert the current look of the root,
//! content and scrollbar elements.
//!
//! # Invariants
//!
//! 1. Surface ids are unique for the life of the host.
//! 2. `live_surfaces()` is exactly the set created and not yet destroyed.

use std::collections::BTreeSet;

use infinilist_core::logging::warn;
use infinilist_core::{ElementStyle, Host, HostElement, Size, Surface};
use serde_json::json;

/// Surface handed out by [`HeadlessHost`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessSurface {
    id: u64,
    style: ElementStyle,
    text: String,
    style_writes: usize,
    text_writes: usize,
}

impl HeadlessSurface {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// All style declarations applied so far, merged.
    #[inline]
    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `display` is `none`.
    pub fn is_hidden(&self) -> bool {
        self.style.visible == Some(false)
    }

    /// Vertical translation currently applied.
    pub fn translate_y(&self) -> Option<f64> {
        self.style.transform.map(|t| t.translate_y)
    }

    #[inline]
    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    #[inline]
    pub fn text_writes(&self) -> usize {
        self.text_writes
    }
}

impl Surface for HeadlessSurface {
    fn apply_style(&mut self, style: &ElementStyle) {
        self.style.merge(style);
        self.style_writes += 1;
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.text_writes += 1;
    }
}

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Mount,
    Unmount,
    CreateSurface { id: u64 },
    DestroySurface { id: u64 },
    ApplyStyle { element: HostElement, css: String },
    ResizeListener { enabled: bool },
    RequestFrame,
}

impl HostCall {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Mount => json!({ "call": "mount" }),
            Self::Unmount => json!({ "call": "unmount" }),
            Self::CreateSurface { id } => json!({ "call": "create_surface", "id": id }),
            Self::DestroySurface { id } => json!({ "call": "destroy_surface", "id": id }),
            Self::ApplyStyle { element, css } => {
                json!({ "call": "apply_style", "element": element.as_str(), "css": css })
            }
            Self::ResizeListener { enabled } => {
                json!({ "call": "resize_listener", "enabled": enabled })
            }
            Self::RequestFrame => json!({ "call": "request_frame" }),
        }
    }
}

/// Recording host with a settable viewport.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    viewport: Size,
    mounted: bool,
    resize_listener: bool,
    frames_requested: usize,
    next_id: u64,
    live: BTreeSet<u64>,
    destroyed: usize,
    elements: [ElementStyle; 3],
    journal: Vec<HostCall>,
}

impl HeadlessHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            mounted: false,
            resize_listener: false,
            frames_requested: 0,
            next_id: 0,
            live: BTreeSet::new(),
            destroyed: 0,
            elements: Default::default(),
            journal: Vec::new(),
        }
    }

    /// Change the viewport; the list sees it on its next refresh.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn resize_listener_enabled(&self) -> bool {
        self.resize_listener
    }

    #[inline]
    pub fn frames_requested(&self) -> usize {
        self.frames_requested
    }

    /// Surfaces created so far.
    #[inline]
    pub fn created(&self) -> usize {
        self.next_id as usize
    }

    /// Surfaces destroyed so far.
    #[inline]
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Ids of surfaces created and not destroyed.
    #[inline]
    pub fn live_surfaces(&self) -> &BTreeSet<u64> {
        &self.live
    }

    /// Merged style of one of the fixed elements.
    pub fn element_style(&self, element: HostElement) -> &ElementStyle {
        &self.elements[slot(element)]
    }

    #[inline]
    pub fn journal(&self) -> &[HostCall] {
        &self.journal
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// The journal as JSON lines.
    pub fn journal_jsonl(&self) -> String {
        self.journal
            .iter()
            .map(|call| call.to_json().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Host for HeadlessHost {
    type Surface = HeadlessSurface;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn mount(&mut self) {
        self.mounted = true;
        self.journal.push(HostCall::Mount);
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.elements = Default::default();
        self.journal.push(HostCall::Unmount);
    }

    fn create_surface(&mut self) -> HeadlessSurface {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        self.journal.push(HostCall::CreateSurface { id });
        HeadlessSurface {
            id,
            ..HeadlessSurface::default()
        }
    }

    fn destroy_surface(&mut self, surface: HeadlessSurface) {
        let id = surface.id;
        if self.live.remove(&id) {
            self.destroyed += 1;
        } else {
            warn!(target: "infinilist.harness", id, "destroying a surface this host does not own");
        }
        self.journal.push(HostCall::DestroySurface { id });
    }

    fn apply_style(&mut self, element: HostElement, style: &ElementStyle) {
        self.elements[slot(element)].merge(style);
        self.journal.push(HostCall::ApplyStyle {
            element,
            css: style.to_css(),
        });
    }

    fn set_resize_listener(&mut self, enabled: bool) {
        self.resize_listener = enabled;
        self.journal.push(HostCall::ResizeListener { enabled });
    }

    fn request_animation_frame(&mut self) {
        self.frames_requested += 1;
        self.journal.push(HostCall::RequestFrame);
    }
}

fn slot(element: HostElement) -> usize {
    match element {
        HostElement::Root => 0,
        HostElement::Content => 1,
        HostElement::Scrollbar => 2,
    }
}
