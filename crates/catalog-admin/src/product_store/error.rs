//! Error types for the Product table.

use thiserror::Error;

/// Errors that can occur during product operations.
///
/// A fronting HTTP route would map these onto its status contract:
/// `NotFound` → 404, `InvalidPosition` → 400, everything else → 500.
/// `NotFound` also covers a product that exists but not in the category
/// group named by the request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found in the specified group.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested position is missing or out of range.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::StoreCommunicationError(msg)
    }
}
