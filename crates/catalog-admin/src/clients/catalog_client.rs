//! # CatalogClient Trait
//!
//! Provides a common interface for table-specific clients, adding default
//! `get` and `delete` methods built on top of a generic [`StoreClient`].

use crate::store::{StoreClient, StoreError, StoreRecord};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit standard store operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// common operations like `get` and `delete`; each client supplies only its
/// inner handle and the mapping from store errors onto its own error type.
#[async_trait]
pub trait CatalogClient<T: StoreRecord>: Send + Sync {
    /// The table-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific table error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
