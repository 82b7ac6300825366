//! # Category Client
//!
//! The category reorder collaborator: the typed API a fronting admin route
//! would call with `{ categoryUuid, newIndex }`-shaped requests. It wraps a
//! `StoreClient<Category>` and maps store errors onto [`CategoryError`].

use crate::category_store::CategoryError;
use crate::clients::catalog_client::CatalogClient;
use crate::model::{Category, CategoryCreate, CategoryId};
use crate::store::{StoreClient, StoreError};
use async_trait::async_trait;
use ordering_engine::{OrderingError, SortKey};
use tracing::{debug, instrument};

/// Client for the Category table.
#[derive(Clone)]
pub struct CategoryClient {
    inner: StoreClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: StoreClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &StoreClient<Category> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => CategoryError::NotFound(id),
            StoreError::Ordering(OrderingError::ItemNotFound(id)) => CategoryError::NotFound(id),
            StoreError::Ordering(err @ OrderingError::InvalidPosition { .. }) => {
                CategoryError::InvalidPosition(err.to_string())
            }
            other => CategoryError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl CategoryClient {
    /// Create a category; the store places it last in the display order.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        params: CategoryCreate,
    ) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All categories in display order — the admin dashboard's list.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        debug!("Sending request");
        self.inner.list(()).await.map_err(Self::map_error)
    }

    /// Move a category to `new_index` among all categories.
    ///
    /// Returns the single new sort key that was persisted — the `{ sort }`
    /// payload of the reorder endpoint. No other category is written.
    #[instrument(skip(self))]
    pub async fn reorder_category(
        &self,
        id: CategoryId,
        new_index: usize,
    ) -> Result<SortKey, CategoryError> {
        debug!("Sending reorder to store");
        self.inner
            .reorder(id, (), new_index)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::{create_mock_client, expect_reorder, MockStore};

    #[tokio::test]
    async fn test_reorder_forwards_id_and_index() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let category_client = CategoryClient::new(client);

        let reorder_task =
            tokio::spawn(async move { category_client.reorder_category(CategoryId(3), 0).await });

        let (id, (), new_index, responder) = expect_reorder(&mut receiver)
            .await
            .expect("Expected Reorder request");
        assert_eq!(id, CategoryId(3));
        assert_eq!(new_index, 0);

        responder.send(Ok(SortKey::new(0.5).unwrap())).unwrap();

        let result = reorder_task.await.unwrap();
        assert_eq!(result.unwrap(), SortKey::new(0.5).unwrap());
    }

    #[tokio::test]
    async fn test_get_runs_on_a_spawned_task() {
        let mut mock = MockStore::<Category>::new();
        mock.expect_get(CategoryId(2)).return_ok(Some(Category::new(
            CategoryId(2),
            "Merch",
            "merch",
            SortKey::new(1.0).unwrap(),
        )));

        // The client future crosses a task boundary, so it must be Send.
        let category_client = CategoryClient::new(mock.client());
        let handle = tokio::spawn(async move { category_client.get(CategoryId(2)).await });

        let fetched = handle.await.unwrap().unwrap().expect("Category missing");
        assert_eq!(fetched.name, "Merch");
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_category_maps_to_not_found() {
        let mut mock = MockStore::<Category>::new();
        mock.expect_reorder(CategoryId(99)).return_err(
            OrderingError::ItemNotFound("category_99".to_string()).into(),
        );

        let category_client = CategoryClient::new(mock.client());
        let result = category_client.reorder_category(CategoryId(99), 0).await;

        assert_eq!(
            result,
            Err(CategoryError::NotFound("category_99".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_bad_index_maps_to_invalid_position() {
        let mut mock = MockStore::<Category>::new();
        mock.expect_reorder(CategoryId(1))
            .return_err(OrderingError::InvalidPosition { index: 9, len: 2 }.into());

        let category_client = CategoryClient::new(mock.client());
        let result = category_client.reorder_category(CategoryId(1), 9).await;

        assert!(matches!(result, Err(CategoryError::InvalidPosition(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_communication_error() {
        let mut mock = MockStore::<Category>::new();
        mock.expect_reorder(CategoryId(1))
            .return_err(StoreError::ActorClosed);

        let category_client = CategoryClient::new(mock.client());
        let result = category_client.reorder_category(CategoryId(1), 0).await;

        assert!(matches!(
            result,
            Err(CategoryError::StoreCommunicationError(_))
        ));
        mock.verify();
    }
}
