//! # Generic Store Client
//!
//! The typed, cloneable handle for talking to a table actor. All methods
//! forward a request over the mpsc channel and await the oneshot reply.

use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use crate::store::record::StoreRecord;
use ordering_engine::SortKey;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a [`StoreActor`](crate::store::StoreActor).
///
/// Holds only a sender, so cloning is cheap; hand clones to every
/// collaborator that needs the table.
#[derive(Clone)]
pub struct StoreClient<T: StoreRecord> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreRecord> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Creates a record; the store assigns its id and places it last in
    /// its group.
    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { params, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Fetches the sibling list for `group` in display order.
    pub async fn list(&self, group: T::Group) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { group, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Moves `id` to `new_index` within `group`; returns the single new
    /// sort key that was persisted.
    pub async fn reorder(
        &self,
        id: T::Id,
        group: T::Group,
        new_index: usize,
    ) -> Result<SortKey, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Reorder {
                id,
                group,
                new_index,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
