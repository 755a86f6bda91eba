#![forbid(unsafe_code)]

//! The windowing engine.
//!
//! [`InfiniteList`] keeps a contiguous, index-sorted window of bound layers
//! covering exactly the visible items. Each render recomputes the
//! [`VisibleRange`], parks layers that left it in the [`LayerPool`], and
//! borrows (or creates) layers for items that entered it.
//!
//! # Lifecycle
//!
//! ```text
//!   new ──► Detached ──attach──► Idle ◄──tick──► Rendering
//!              ▲                   │                 │
//!              └──────detach───────┴─────────────────┘
//! ```
//!
//! The list is `Rendering` whenever a render is pending (`needs_render`).
//! Ticks on a detached list do nothing and request no further frames.
//!
//! # Frame budget
//!
//! While the [`FrameMeter`] reports less than the policy's `min_fps`, newly
//! revealed items are painted with the busy renderer and queued in the
//! [`RerenderBacklog`]. A render that revealed nothing and runs within
//! budget repaints exactly one backlog entry.
//!
//! # Pagination
//!
//! When the viewport reaches past the last item and `has_more` is set, a
//! load-more row is bound at index `count` and the page fetcher is called
//! once for that count. Its [`PageCompletion`] triggers a refresh on the next
//! tick.
//!
//! # Invariants
//!
//! 1. The window is sorted by index, contiguous, and duplicate free; the
//!    load-more row, when present, is last and sits at `count`.
//! 2. A layer lives in exactly one of the window or the pool.
//! 3. Every backlog entry is the index of a layer in the window.
//! 4. After `refresh` the window and the backlog are empty.
//! 5. The page fetcher is called at most once per item count until its
//!    completion is applied.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Page fetch never completes | Load-more row stays, no refetch |
//! | Completion after detach | Ignored |
//! | No page fetcher configured | Load-more row stays, logged at debug |
//! | Offset past the end | Empty window (load-more row if `has_more`) |

use std::collections::VecDeque;
use std::fmt;

use infinilist_core::{
    FrameMeter, HeightTable, Host, HostElement, Layer, LayerHeight, LayerPool, ReleaseMode, Size,
    Surface,
};
use infinilist_scroll::{
    ImmediateScroller, ScrollBridge, ScrollDimensions, ScrollPhysics, TouchInputProvider,
};
use web_time::Instant;

use crate::backlog::RerenderBacklog;
use crate::chrome;
use crate::config::ListConfig;
use crate::error::ListError;
use crate::pagination::{PageChannel, PageCompletion};
use crate::scrollbar::ScrollbarMetrics;
use crate::stats::RenderStats;
use crate::window::VisibleRange;

/// Attachment state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Detached,
    /// Attached, nothing to render.
    Idle,
    /// Attached, a render is pending.
    Rendering,
}

/// What one [`InfiniteList::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The list is not attached; nothing happened.
    Detached,
    /// No render was needed.
    Idle,
    /// A render pass ran.
    Rendered,
}

struct Attachment<H> {
    host: H,
    viewport: Size,
    pages: PageChannel,
}

/// Windowed, layer-recycling list bound to a [`Host`].
pub struct InfiniteList<H: Host> {
    config: ListConfig<H::Surface>,
    bridge: ScrollBridge,
    attachment: Option<Attachment<H>>,
    table: HeightTable,
    window: VecDeque<Layer<H::Surface>>,
    pool: LayerPool<H::Surface>,
    backlog: RerenderBacklog,
    meter: FrameMeter,
    needs_render: bool,
    pending_fetch: Option<usize>,
    scrollbar: ScrollbarMetrics,
    stats: RenderStats,
}

impl<H: Host> fmt::Debug for InfiniteList<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteList")
            .field("state", &self.state())
            .field("items", &self.table.item_count())
            .field("window", &self.rendered_indices())
            .field("pooled", &self.pool.len())
            .field("backlog", &self.backlog.len())
            .field("fps", &self.meter.fps())
            .field("bridge", &self.bridge)
            .finish()
    }
}

impl<H: Host> InfiniteList<H> {
    /// A detached list scrolled by an [`ImmediateScroller`].
    pub fn new(config: ListConfig<H::Surface>) -> Self {
        Self::with_physics(config, Box::new(ImmediateScroller::new()))
    }

    /// A detached list scrolled by `physics`.
    pub fn with_physics(config: ListConfig<H::Surface>, physics: Box<dyn ScrollPhysics>) -> Self {
        let meter = FrameMeter::new(config.policy().to_frame_meter_config());
        Self {
            config,
            bridge: ScrollBridge::new(physics),
            attachment: None,
            table: HeightTable::new(),
            window: VecDeque::new(),
            pool: LayerPool::new(),
            backlog: RerenderBacklog::new(),
            meter,
            needs_render: false,
            pending_fetch: None,
            scrollbar: ScrollbarMetrics::default(),
            stats: RenderStats::default(),
        }
    }

    /// Mount into `host` and start the frame loop.
    ///
    /// Applies the root, content and scrollbar base styles, connects
    /// `touch`, enables resize notifications, requests the first animation
    /// frame and refreshes.
    pub fn attach(
        &mut self,
        mut host: H,
        touch: Box<dyn TouchInputProvider>,
    ) -> Result<&mut Self, ListError> {
        if self.attachment.is_some() {
            return Err(ListError::AlreadyAttached);
        }
        host.mount();
        let viewport = host.viewport();
        host.apply_style(HostElement::Root, &chrome::root_style(viewport));
        host.apply_style(HostElement::Content, &chrome::content_style());
        host.apply_style(
            HostElement::Scrollbar,
            &self.config.policy().scrollbar_base_style(),
        );
        host.set_resize_listener(true);
        self.bridge.connect(touch);
        self.meter.reset();
        host.request_animation_frame();

        self.attachment = Some(Attachment {
            host,
            viewport,
            pages: PageChannel::new(),
        });
        self.pending_fetch = None;
        tracing::debug!(
            target: "infinilist.list",
            width = viewport.width,
            height = viewport.height,
            "list attached"
        );
        self.refresh()?;
        Ok(self)
    }

    /// Stop the frame loop, destroy every layer, unmount, and hand the host
    /// back. Outstanding page completions become no-ops.
    ///
    /// Returns `None` when the list was not attached.
    pub fn detach(&mut self) -> Option<H> {
        let Attachment { mut host, pages, .. } = self.attachment.take()?;
        pages.cancel();
        self.bridge.disconnect();
        host.set_resize_listener(false);

        let mut destroyed = 0u64;
        for layer in self.window.drain(..).chain(self.pool.drain()) {
            host.destroy_surface(layer.into_surface());
            destroyed += 1;
        }
        self.stats.layers_destroyed += destroyed;
        self.backlog.clear();
        self.pending_fetch = None;
        self.needs_render = false;
        host.unmount();
        tracing::debug!(target: "infinilist.list", destroyed, "list detached");
        Some(host)
    }

    /// Run one animation frame at `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(attachment) = self.attachment.as_ref() else {
            return TickOutcome::Detached;
        };
        let page_arrived = attachment.pages.take_completed();

        self.stats.frames += 1;
        let was_busy = self.meter.is_over_budget();
        if let Some(fps) = self.meter.record_frame(now) {
            let busy = self.meter.is_over_budget();
            if busy && !was_busy {
                tracing::debug!(target: "infinilist.list", fps, "frame budget exceeded, degrading");
            } else if was_busy && !busy {
                tracing::debug!(
                    target: "infinilist.list",
                    fps,
                    backlog = self.backlog.len(),
                    "frame budget recovered"
                );
            }
        }

        self.bridge.pump(now);
        if self.bridge.take_changed() {
            self.needs_render = true;
        }

        if page_arrived {
            self.pending_fetch = None;
            self.stats.page_completions += 1;
            tracing::debug!(target: "infinilist.list", "page completion received");
            if self.refresh().is_err() {
                return TickOutcome::Detached;
            }
        }

        let outcome = if self.needs_render && self.render().is_ok() {
            TickOutcome::Rendered
        } else {
            TickOutcome::Idle
        };

        if let Some(attachment) = self.attachment.as_mut() {
            attachment.host.request_animation_frame();
        }
        outcome
    }

    /// Host resize notification.
    pub fn handle_resize(&mut self) -> Result<(), ListError> {
        self.refresh()
    }

    /// Drop the window, re-measure the viewport and rebuild the height
    /// table from the configured count and heights.
    ///
    /// Window layers are discarded (their surfaces destroyed) since their
    /// geometry is no longer valid; pooled layers survive.
    pub fn refresh(&mut self) -> Result<(), ListError> {
        let Some(attachment) = self.attachment.as_mut() else {
            return Err(ListError::NotAttached);
        };
        let host = &mut attachment.host;
        let viewport = host.viewport();
        attachment.viewport = viewport;
        host.apply_style(HostElement::Root, &chrome::root_size_style(viewport));

        for layer in self.window.drain(..) {
            if let Some(discarded) = self.pool.release(layer, ReleaseMode::Discard) {
                host.destroy_surface(discarded.into_surface());
                self.stats.layers_destroyed += 1;
            }
        }
        self.backlog.clear();

        let config = &self.config;
        self.table = HeightTable::build(config.items_count(), |index| config.item_height(index));
        let list_height = list_height(&self.table, config);
        self.bridge.set_dimensions(ScrollDimensions {
            client_width: viewport.width,
            client_height: viewport.height,
            content_width: viewport.width,
            content_height: list_height,
        });

        self.needs_render = true;
        self.stats.refreshes += 1;
        tracing::debug!(
            target: "infinilist.list",
            items = self.table.item_count(),
            list_height,
            "list refreshed"
        );
        Ok(())
    }

    /// One render pass: reconcile the window with the visible range, paint
    /// new items, drain the backlog, handle load-more, and move the content
    /// and scrollbar.
    pub fn render(&mut self) -> Result<(), ListError> {
        let Some(attachment) = self.attachment.as_mut() else {
            return Err(ListError::NotAttached);
        };
        let host = &mut attachment.host;
        let viewport = attachment.viewport;
        let offset = self.bridge.top();
        let count = self.table.item_count();
        let has_more = self.config.has_more();
        let range = VisibleRange::compute(&self.table, offset, viewport.height, has_more);
        let busy = self.meter.is_over_budget();
        let load_more_type = self.config.policy().load_more.type_id.clone();

        let _span = tracing::debug_span!(
            target: "infinilist.list",
            "infinilist.render",
            top = range.top,
            end = range.end,
            offset,
            busy,
        )
        .entered();
        self.stats.renders += 1;

        // Park layers that scrolled out at either end.
        while let Some(index) = self.window.front().and_then(Layer::index) {
            if index >= range.top {
                break;
            }
            if let Some(layer) = self.window.pop_front() {
                park(layer, host, &mut self.pool, &mut self.backlog, &mut self.stats);
            }
        }
        while let Some(index) = self.window.back().and_then(Layer::index) {
            if index < range.keep_end() {
                break;
            }
            if let Some(layer) = self.window.pop_back() {
                park(layer, host, &mut self.pool, &mut self.backlog, &mut self.stats);
            }
        }

        let mut revealed = false;
        let mut ctx = PaintContext {
            host,
            pool: &mut self.pool,
            config: &mut self.config,
            table: &self.table,
            backlog: &mut self.backlog,
            stats: &mut self.stats,
            width: viewport.width,
            busy,
        };

        // Fill the gap above the window.
        let rendered_start = self
            .window
            .front()
            .and_then(Layer::index)
            .unwrap_or(range.end)
            .min(range.end);
        if range.top < rendered_start {
            let fresh: Vec<_> = (range.top..rendered_start)
                .map(|index| ctx.reveal(index))
                .collect();
            for layer in fresh.into_iter().rev() {
                self.window.push_front(layer);
            }
            revealed = true;
        }

        // Fill the gap below the window.
        let rendered_end = self
            .window
            .back()
            .and_then(Layer::index)
            .map_or(range.top, |index| index + 1);
        for index in rendered_end..range.end {
            self.window.push_back(ctx.reveal(index));
            revealed = true;
        }

        if !revealed && !busy {
            if let Some(index) = ctx.backlog.pop_next() {
                if let Some(layer) = self.window.iter_mut().find(|l| l.index() == Some(index)) {
                    ctx.config.paint_item(index, layer.surface_mut());
                    ctx.stats.items_painted += 1;
                    ctx.stats.backlog_drains += 1;
                    tracing::trace!(target: "infinilist.list", index, "backlog entry repainted");
                }
            }
        }

        if range.wants_more {
            let trailing_is_load_more = self
                .window
                .back()
                .is_some_and(|l| l.index() == Some(count) && l.type_id() == Some(load_more_type.as_str()));
            if !trailing_is_load_more {
                let mut layer = ctx.bind(
                    count,
                    self.table.total(),
                    LayerHeight::Auto,
                    &load_more_type,
                );
                ctx.config.paint_load_more(count, layer.surface_mut());
                self.window.push_back(layer);

                if self.pending_fetch != Some(count) {
                    self.pending_fetch = Some(count);
                    let completion: PageCompletion = attachment.pages.completion(count);
                    if self.config.fetch_page(count, completion) {
                        self.stats.page_fetches += 1;
                        tracing::debug!(target: "infinilist.list", count, "page fetch requested");
                    } else {
                        tracing::debug!(
                            target: "infinilist.list",
                            count,
                            "more pages wanted but no page fetcher configured"
                        );
                    }
                }
            }
        }

        let host = &mut attachment.host;
        self.scrollbar = ScrollbarMetrics::compute(
            viewport.height,
            list_height(&self.table, &self.config),
            offset,
            self.config.policy().scrollbar.min_thumb_px,
        );
        host.apply_style(HostElement::Scrollbar, &self.scrollbar.style());
        host.apply_style(HostElement::Content, &chrome::content_transform(offset));

        self.needs_render = !self.backlog.is_empty();
        Ok(())
    }

    /// Scroll so item `index` is at the top of the viewport.
    pub fn scroll_to_item(&mut self, index: usize, animate: bool) -> Result<(), ListError> {
        if self.attachment.is_none() {
            return Err(ListError::NotAttached);
        }
        let count = self.table.item_count();
        if index >= count {
            return Err(ListError::IndexOutOfRange { index, count });
        }
        let top = self.table.offset_of(index);
        tracing::debug!(target: "infinilist.scroll", index, top, animate, "scroll to item");
        self.bridge.scroll_to(top, animate);
        Ok(())
    }

    pub fn state(&self) -> ListState {
        match (&self.attachment, self.needs_render) {
            (None, _) => ListState::Detached,
            (Some(_), true) => ListState::Rendering,
            (Some(_), false) => ListState::Idle,
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Current vertical scroll offset.
    #[inline]
    pub fn scroll_offset(&self) -> f64 {
        self.bridge.top()
    }

    /// Indices bound in the window, in order (the load-more row included).
    pub fn rendered_indices(&self) -> Vec<usize> {
        self.window.iter().filter_map(Layer::index).collect()
    }

    /// Layers bound in the window, in index order.
    pub fn rendered_layers(&self) -> impl Iterator<Item = &Layer<H::Surface>> {
        self.window.iter()
    }

    #[inline]
    pub fn pool(&self) -> &LayerPool<H::Surface> {
        &self.pool
    }

    #[inline]
    pub fn backlog(&self) -> &RerenderBacklog {
        &self.backlog
    }

    #[inline]
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Latest frame-rate estimate.
    #[inline]
    pub fn measured_fps(&self) -> f64 {
        self.meter.fps()
    }

    /// True while below the frame budget.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.meter.is_over_budget()
    }

    #[inline]
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    #[inline]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Thumb geometry from the last render.
    #[inline]
    pub fn scrollbar(&self) -> ScrollbarMetrics {
        self.scrollbar
    }

    #[inline]
    pub fn height_table(&self) -> &HeightTable {
        &self.table
    }

    /// Dimensions last forwarded to the physics engine.
    #[inline]
    pub fn scroll_dimensions(&self) -> ScrollDimensions {
        self.bridge.dimensions()
    }

    /// Viewport measured at the last refresh, `None` while detached.
    pub fn viewport(&self) -> Option<Size> {
        self.attachment.as_ref().map(|a| a.viewport)
    }

    pub fn host(&self) -> Option<&H> {
        self.attachment.as_ref().map(|a| &a.host)
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.attachment.as_mut().map(|a| &mut a.host)
    }

    #[inline]
    pub fn config(&self) -> &ListConfig<H::Surface> {
        &self.config
    }
}

/// Scrollable height: every item, plus room for the load-more row.
fn list_height<S: Surface>(table: &HeightTable, config: &ListConfig<S>) -> f64 {
    let reserve = if config.has_more() {
        config.policy().layout.default_item_height
    } else {
        0.0
    };
    table.total() + reserve
}

fn park<H: Host>(
    layer: Layer<H::Surface>,
    host: &mut H,
    pool: &mut LayerPool<H::Surface>,
    backlog: &mut RerenderBacklog,
    stats: &mut RenderStats,
) {
    if let Some(index) = layer.index() {
        backlog.remove(index);
    }
    if let Some(discarded) = pool.release(layer, ReleaseMode::Keep) {
        host.destroy_surface(discarded.into_surface());
        stats.layers_destroyed += 1;
    }
}

/// Borrowed pieces of the list needed to bind and paint newly revealed
/// layers while the window itself is being edited.
struct PaintContext<'a, H: Host> {
    host: &'a mut H,
    pool: &'a mut LayerPool<H::Surface>,
    config: &'a mut ListConfig<H::Surface>,
    table: &'a HeightTable,
    backlog: &'a mut RerenderBacklog,
    stats: &'a mut RenderStats,
    width: f64,
    busy: bool,
}

impl<H: Host> PaintContext<'_, H> {
    fn bind(
        &mut self,
        index: usize,
        offset: f64,
        height: LayerHeight,
        type_id: &str,
    ) -> Layer<H::Surface> {
        let mut layer = match self.pool.borrow(type_id) {
            Some(layer) => layer,
            None => {
                self.stats.layers_created += 1;
                Layer::new(self.host.create_surface())
            }
        };
        layer.attach(index, offset, self.width, height, type_id);
        layer
    }

    /// Bind and paint item `index`, degraded when over budget.
    fn reveal(&mut self, index: usize) -> Layer<H::Surface> {
        let type_id = self.config.item_type(index);
        let height = LayerHeight::Px(self.table.height_of(index).unwrap_or(0.0));
        let mut layer = self.bind(index, self.table.offset_of(index), height, &type_id);
        if self.busy {
            self.config.paint_busy(index, layer.surface_mut());
            self.backlog.insert(index);
            self.stats.degraded_paints += 1;
        } else {
            self.config.paint_item(index, layer.surface_mut());
            self.stats.items_painted += 1;
        }
        layer
    }
}
