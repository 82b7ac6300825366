//! # Orderable Trait
//!
//! The `Orderable` trait is the contract between the engine and any record
//! type carrying a sort key. The engine only ever needs to read two things
//! from a sibling: a stable identifier and the current [`SortKey`].
//!
//! # Architecture Note
//! By keeping this seam read-only and synchronous, the engine stays pure:
//! it can be handed a borrowed sibling list, compute one key, and return it
//! without mutating anything. Whatever owns the records (an actor, an ORM
//! row set, a plain `Vec` in a test) decides how the returned key gets
//! persisted.

use crate::key::SortKey;
use std::fmt::{Debug, Display};

/// Contract for any record that participates in fractional ordering.
pub trait Orderable {
    /// The stable identifier for this record.
    ///
    /// `Ord` is required because the id is the deterministic tie-breaker:
    /// two siblings may share a key, but `(sort, id)` must yield one
    /// reproducible display order.
    type Id: Eq + Ord + Clone + Display + Debug + Send + Sync;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// The record's current sort key.
    fn sort_key(&self) -> SortKey;
}
