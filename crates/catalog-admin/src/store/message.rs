//! # Store Messages
//!
//! The message types exchanged between a [`StoreClient`](crate::store::StoreClient)
//! and its [`StoreActor`](crate::store::StoreActor).

use crate::store::error::StoreError;
use crate::store::record::StoreRecord;
use ordering_engine::SortKey;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests a table actor can process.
///
/// The variants are the record lifecycle from the catalog's point of view:
/// rows are created (placed last in their group), read, listed in display
/// order, reordered (the one mutation of `sort`), and deleted. There is no
/// general field-update message — the `sort` column is mutated exclusively
/// through `Reorder`, which is what makes the single-write guarantee easy
/// to audit.
#[derive(Debug)]
pub enum StoreRequest<T: StoreRecord> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Materialize the sibling list for `group`, ascending `(sort, id)`.
    List {
        group: T::Group,
        respond_to: Response<Vec<T>>,
    },
    /// Move one record to `new_index` within `group`.
    ///
    /// The group is taken from the request, not the record, so a caller
    /// asking to reorder a product inside a category it does not belong to
    /// gets `ItemNotFound` — the 404 contract of the reorder endpoints.
    Reorder {
        id: T::Id,
        group: T::Group,
        new_index: usize,
        respond_to: Response<SortKey>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
