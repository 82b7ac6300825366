//! # StoreRecord Trait
//!
//! The contract a catalog record must satisfy to be managed by the generic
//! [`StoreActor`](crate::store::StoreActor). It extends the engine's
//! read-only [`Orderable`] seam with what the store additionally needs:
//! how to build a record from creation params, which sibling group it
//! belongs to, and how to persist a new sort key onto it.
//!
//! # Architecture Note
//! Associated types keep the store generic without losing type safety: a
//! `Category` table cannot be sent a `ProductCreate` payload, and a product
//! reorder is always scoped by the product's group type. This is the same
//! polymorphism-by-contract that lets one actor implementation serve every
//! table.

use ordering_engine::{Orderable, SortKey};
use std::fmt::Debug;

/// Contract for records managed by a [`StoreActor`](crate::store::StoreActor).
///
/// Implementors also need `Id: From<u32> + Hash` for the store's id
/// generation and row map; those bounds appear on the store's impl blocks
/// rather than here so the trait stays usable for plain in-memory fixtures.
pub trait StoreRecord: Orderable + Clone + Send + Sync + 'static {
    /// The sibling-group key. Records reorder only against rows sharing
    /// their group. Use `()` when the whole table is one group.
    type Group: Eq + Clone + Debug + Send + Sync;

    /// The data required to create a new record (sort key excluded — the
    /// store assigns it).
    type Create: Debug + Send;

    /// Construct the full record from the generated id, the payload, and
    /// the store-assigned sort key.
    fn from_create(id: Self::Id, params: Self::Create, sort: SortKey) -> Self;

    /// The record's sibling-group key.
    fn group(&self) -> Self::Group;

    /// Persist a new sort key onto the record.
    fn set_sort(&mut self, sort: SortKey);
}
