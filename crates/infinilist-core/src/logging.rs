#![forbid(unsafe_code)]

//! Logging facade.
//!
//! Re-exports the `tracing` macros so downstream crates log through one path.
//! Targets used across the workspace:
//!
//! | Target | Emitted by |
//! |--------|------------|
//! | `infinilist.list` | attach, detach, refresh, pagination, degradation |
//! | `infinilist.pool` | layer pool misses and discards |
//! | `infinilist.scroll` | scroll bridge connection and touch dispatch |

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
