//! # Engine Errors
//!
//! This module defines the error taxonomy for the ordering engine. All three
//! conditions are local and recoverable: bad positions and unknown items are
//! surfaced to the caller as rejected requests, and precision exhaustion is
//! recovered by renumbering the group and retrying the move once.

use crate::key::SortKey;
use thiserror::Error;

/// Errors that can occur while computing a new sort key.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderingError {
    /// The requested target index is outside the insertable range.
    ///
    /// `len` is the sibling count *after* removing the moved item; valid
    /// target indexes are `0..=len`.
    #[error("Position {index} out of bounds for a group of {len}")]
    InvalidPosition { index: usize, len: usize },

    /// The moved item is absent from the supplied sibling group.
    #[error("Item not found in group: {0}")]
    ItemNotFound(String),

    /// No representable key sorts strictly between the two bounds.
    ///
    /// Reported instead of silently emitting a duplicate or out-of-order
    /// key. The recovery path is [`renumber`](crate::renumber) followed by
    /// one retry of the original move.
    #[error("No representable key between {prev:?} and {next:?}")]
    PrecisionExhausted {
        prev: Option<SortKey>,
        next: Option<SortKey>,
    },
}
