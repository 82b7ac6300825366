//! # Store Errors
//!
//! Common error type for the store layer. Ordering-engine errors pass
//! through transparently so clients can map them (`ItemNotFound` → 404,
//! `InvalidPosition` → 400) onto their own error enums.

use ordering_engine::OrderingError;

/// Errors that can occur within the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Ordering(#[from] OrderingError),
}
