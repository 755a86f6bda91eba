#![forbid(unsafe_code)]

//! Page-fetch completion handles.
//!
//! The page fetcher receives a [`PageCompletion`] and may call
//! [`PageCompletion::complete`] at any later point, from any thread. The
//! handle only flips an atomic flag; the list observes the flag on its next
//! tick and refreshes there, so list state is still mutated only from the
//! ticking thread.
//!
//! Each attachment owns one channel. Detaching (or dropping the list)
//! cancels it, after which completions are silently dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
struct PageState {
    completed: AtomicBool,
    cancelled: AtomicBool,
}

/// Handle passed to the page fetcher; call [`complete`](Self::complete)
/// once the new items are available.
#[derive(Debug)]
pub struct PageCompletion {
    state: Arc<PageState>,
    requested_at: usize,
}

impl PageCompletion {
    /// Item count at the time the page was requested.
    #[inline]
    pub fn requested_at(&self) -> usize {
        self.requested_at
    }

    /// True once the list this page was requested for has detached.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Acquire)
    }

    /// Signal that more data arrived. The list refreshes on its next tick;
    /// after detach this is a no-op.
    pub fn complete(self) {
        if !self.is_cancelled() {
            self.state.completed.store(true, Ordering::Release);
        }
    }
}

/// Receiving side of page completions for one attachment.
#[derive(Debug, Default)]
pub(crate) struct PageChannel {
    state: Arc<PageState>,
}

impl PageChannel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn completion(&self, requested_at: usize) -> PageCompletion {
        PageCompletion {
            state: Arc::clone(&self.state),
            requested_at,
        }
    }

    /// Consume a pending completion.
    pub(crate) fn take_completed(&self) -> bool {
        self.state.completed.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::Release);
        self.state.completed.store(false, Ordering::Release);
    }
}

impl Drop for PageChannel {
    fn drop(&mut self) {
        self.cancel();
    }
}
