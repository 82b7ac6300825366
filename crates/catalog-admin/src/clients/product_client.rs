//! # Product Client
//!
//! The product reorder collaborator: the typed API a fronting admin route
//! would call with `{ productUuid, categoryUuid, newIndex }`-shaped
//! requests. The category names the sibling group the move happens in; a
//! product that exists but lives in a different group is reported as not
//! found, matching the endpoint's 404 contract.

use crate::clients::catalog_client::CatalogClient;
use crate::model::{CategoryId, Product, ProductCreate, ProductId};
use crate::product_store::ProductError;
use crate::store::{StoreClient, StoreError};
use async_trait::async_trait;
use ordering_engine::{OrderingError, SortKey};
use tracing::{debug, instrument};

/// Client for the Product table.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::Ordering(OrderingError::ItemNotFound(id)) => ProductError::NotFound(id),
            StoreError::Ordering(err @ OrderingError::InvalidPosition { .. }) => {
                ProductError::InvalidPosition(err.to_string())
            }
            other => ProductError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Create a product; the store places it last within its category group.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Products of one category group in display order (`None` lists the
    /// uncategorized group).
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list(category).await.map_err(Self::map_error)
    }

    /// Move a product to `new_index` within the named category group.
    ///
    /// Returns the single new sort key that was persisted — the `{ sort }`
    /// payload of the reorder endpoint. No other product is written.
    #[instrument(skip(self))]
    pub async fn reorder_product(
        &self,
        id: ProductId,
        category: Option<CategoryId>,
        new_index: usize,
    ) -> Result<SortKey, ProductError> {
        debug!("Sending reorder to store");
        self.inner
            .reorder(id, category, new_index)
            .await
            .map_err(Self::map_error)
    }
}
