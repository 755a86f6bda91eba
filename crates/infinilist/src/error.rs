#![forbid(unsafe_code)]

//! Errors returned by list operations.
//!
//! Overload is not an error: it degrades rendering and recovers through the
//! backlog. A page fetch that never completes is not an error either; the
//! load-more row simply stays in place. What remains are misuse of the
//! attachment lifecycle and out-of-range scroll targets.

use std::fmt;

/// Errors from [`InfiniteList`](crate::InfiniteList) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// `attach` was called on a list that is already attached.
    AlreadyAttached,
    /// The operation needs a host but the list is detached.
    NotAttached,
    /// `scroll_to_item` targeted an index outside `[0, count)`.
    IndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached => f.write_str("list is already attached to a host"),
            Self::NotAttached => f.write_str("list is not attached to a host"),
            Self::IndexOutOfRange { index, count } => {
                write!(f, "item index {index} out of range (item count {count})")
            }
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ListError::IndexOutOfRange { index: 12, count: 10 }.to_string(),
            "item index 12 out of range (item count 10)"
        );
        assert_eq!(ListError::NotAttached.to_string(), "list is not attached to a host");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ListError>();
    }
}
