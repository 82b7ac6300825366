//! # Catalog Store
//!
//! The persistence handle for the catalog: one generic actor per table,
//! owning its rows and processing requests sequentially over a channel.
//!
//! # Architecture Note
//! The surrounding product treats persistence as an external collaborator
//! providing simple read/update operations on records carrying a `sort`
//! field. Modeling that collaborator as an actor buys two things:
//!
//! - **An explicit handle**: callers receive a [`StoreClient`] instead of
//!   reaching for a module-scoped database client. Dependencies are
//!   injected, not ambient.
//! - **Per-table serialization**: reorder requests read the whole sibling
//!   list and write one key. Two racing reorders on overlapping siblings
//!   could otherwise each compute against a stale neighbor view; the
//!   actor's sequential loop makes that race impossible within a table,
//!   with no locks.
//!
//! The engine itself stays pure — the actor is the caller that materializes
//! the sibling list, persists the single returned key, and owns the
//! renumber-and-retry recovery when precision runs out.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::StoreRecord;
