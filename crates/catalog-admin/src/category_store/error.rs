//! Error types for the Category table.

use thiserror::Error;

/// Errors that can occur during category operations.
///
/// A fronting HTTP route would map these onto its status contract:
/// `NotFound` → 404, `InvalidPosition` → 400, everything else → 500.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// The requested position is missing or out of range.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::StoreCommunicationError(msg)
    }
}
