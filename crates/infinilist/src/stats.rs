#![forbid(unsafe_code)]

//! Render counters.

/// Cumulative counters for one list, across attachments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Animation frames observed by `tick`.
    pub frames: u64,
    /// Render passes.
    pub renders: u64,
    /// Items painted with the real renderer, backlog repaints included.
    pub items_painted: u64,
    /// Items painted with the placeholder renderer while over budget.
    pub degraded_paints: u64,
    /// Backlog entries repainted with the real renderer.
    pub backlog_drains: u64,
    /// Surfaces created through the host (pool misses).
    pub layers_created: u64,
    /// Surfaces destroyed through the host.
    pub layers_destroyed: u64,
    /// Page fetcher invocations.
    pub page_fetches: u64,
    /// Page completions applied.
    pub page_completions: u64,
    /// Refreshes (explicit, resize, or page completion).
    pub refreshes: u64,
}
