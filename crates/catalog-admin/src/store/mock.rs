//! # Mock Store & Testing Guide
//!
//! The `MockStore<T>` type implements the same [`StoreClient`] API as the
//! real table actor but operates entirely in-memory against a queue of
//! expectations. It lets you unit-test client logic (error mapping, payload
//! shape) without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockStore | Real Actor |
//! |---------|-----------|------------|
//! | **Speed** | Instant (in-memory) | Fast (involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real rows and sort keys |
//! | **Use Case** | Client logic around the store | Reorder/renumber semantics |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```ignore
//! let mut mock = MockStore::<Category>::new();
//! mock.expect_reorder(CategoryId(3))
//!     .return_ok(SortKey::new(0.5).unwrap());
//!
//! let client = CategoryClient::new(mock.client());
//! let key = client.reorder_category(CategoryId(3), 0).await.unwrap();
//! mock.verify(); // Ensures all expectations were consumed
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! The mock makes the store's failure modes trivial to simulate — a closed
//! actor, an unknown record, an out-of-range position — so client tests can
//! assert the exact domain error each one maps to.
//!
//! For lower-level assertions on the raw request stream, use
//! [`create_mock_client`] with the `expect_*` helpers to inspect each
//! message and answer it by hand.

use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use crate::store::record::StoreRecord;
use ordering_engine::SortKey;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
#[allow(dead_code)] // Future feature: Delete expectations
enum Expectation<T: StoreRecord> {
    Create {
        response: Result<T::Id, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Reorder {
        id: T::Id,
        response: Result<SortKey, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
}

/// A mock store client with expectation tracking for fluent testing.
pub struct MockStore<T: StoreRecord> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreRecord> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreRecord> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering each request from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::List {
                            group: _,
                            respond_to,
                        },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Reorder {
                            id: _,
                            group: _,
                            new_index: _,
                            respond_to,
                        },
                        Some(Expectation::Reorder { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `reorder` operation.
    pub fn expect_reorder(&mut self, id: T::Id) -> ReorderExpectationBuilder<T> {
        ReorderExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreRecord> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response: Ok(value),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreRecord> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> ListExpectationBuilder<T> {
    pub fn return_ok(self, rows: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(rows) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

/// Builder for `reorder` expectations.
pub struct ReorderExpectationBuilder<T: StoreRecord> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreRecord> ReorderExpectationBuilder<T> {
    pub fn return_ok(self, key: SortKey) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reorder {
                id: self.id,
                response: Ok(key),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reorder {
                id: self.id,
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting raw requests.
///
/// The returned client sends messages to a channel the test controls;
/// inspect each arriving request and answer its oneshot by hand to simulate
/// any store behavior deterministically.
pub fn create_mock_client<T: StoreRecord>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Group,
    tokio::sync::oneshot::Sender<Result<Vec<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::List { group, respond_to }) => Some((group, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Reorder request.
pub async fn expect_reorder<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Group,
    usize,
    tokio::sync::oneshot::Sender<Result<SortKey, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Reorder {
            id,
            group,
            new_index,
            respond_to,
        }) => Some((id, group, new_index, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryCreate, CategoryId};

    #[tokio::test]
    async fn test_mock_client_answers_create() {
        let (client, mut receiver) = create_mock_client::<Category>(10);

        let create_task = tokio::spawn(async move {
            let params = CategoryCreate {
                name: "Prints".to_string(),
                slug: "prints".to_string(),
            };
            client.create(params).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Prints");
        responder.send(Ok(CategoryId(1))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(CategoryId(1))));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Category>::new();

        mock.expect_create().return_ok(CategoryId(1));
        mock.expect_reorder(CategoryId(1))
            .return_ok(SortKey::new(0.5).unwrap());

        let client = mock.client();

        let params = CategoryCreate {
            name: "Prints".to_string(),
            slug: "prints".to_string(),
        };
        let id = client.create(params).await.unwrap();
        assert_eq!(id, CategoryId(1));

        let key = client.reorder(id, (), 0).await.unwrap();
        assert_eq!(key, SortKey::new(0.5).unwrap());

        mock.verify();
    }
}
