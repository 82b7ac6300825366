//! # Ordering Engine
//!
//! This crate provides the fractional sort-key machinery used to let admins
//! drag-and-drop reorder sibling lists (categories, products within a
//! category) without rewriting every sibling row on each move.
//!
//! ## Why Fractional Ordering?
//!
//! The naive approach to "move item X to position 3" renumbers the entire
//! sibling list: O(n) persisted writes per drag. Fractional ordering instead
//! computes **one** new key strictly between the two positional neighbors,
//! so a move is O(1) in writes — only the moved row changes.
//!
//! The trade-off is precision: repeated insertions between the same two
//! neighbors halve the available gap until no representable midpoint
//! remains. The engine refuses to emit a duplicate or out-of-order key at
//! that point and reports [`OrderingError::PrecisionExhausted`]; the caller
//! recovers with [`renumber`], a deliberate O(n) rewrite that restores
//! maximal headroom, and retries the move once.
//!
//! ## Architecture Overview
//!
//! The engine is the leaf of the system: pure, synchronous, and stateless.
//! It never performs I/O and never mutates its inputs. Callers own the
//! sibling list (materialized per request from persisted state) and own
//! persisting the single key the engine returns.
//!
//! 1. **Seam** ([`Orderable`]) — any record carrying an id and a [`SortKey`]
//! 2. **Operations** ([`engine`]) — `compute_insertion_key`, `reorder`,
//!    `renumber`, and the canonical `sorted` view
//! 3. **Taxonomy** ([`OrderingError`]) — the three recoverable conditions
//!
//! ## Example
//!
//! ```rust
//! use ordering_engine::{reorder, sorted, Orderable, SortKey};
//!
//! #[derive(Clone)]
//! struct Row { id: u32, sort: SortKey }
//!
//! impl Orderable for Row {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn sort_key(&self) -> SortKey { self.sort }
//! }
//!
//! let rows = vec![
//!     Row { id: 1, sort: SortKey::new(1.0).unwrap() },
//!     Row { id: 2, sort: SortKey::new(2.0).unwrap() },
//!     Row { id: 3, sort: SortKey::new(3.0).unwrap() },
//! ];
//!
//! // Move row 3 to the front: one new key, nothing else touched.
//! let key = reorder(&rows, &3, 0).unwrap();
//! assert!(key < SortKey::new(1.0).unwrap());
//!
//! let mut rows = rows;
//! rows[2].sort = key;
//! let order: Vec<u32> = sorted(&rows).iter().map(|r| r.id()).collect();
//! assert_eq!(order, vec![3, 1, 2]);
//! ```
//!
//! ## Determinism
//!
//! Within a group, two rows may legally share a key. Display order must
//! still be reproducible, so every list materialization orders by
//! `(sort, id)` — the id is the stable secondary key. [`sorted`] is the one
//! canonical implementation of that rule.
//!
//! ## Concurrency Model
//!
//! There is nothing to coordinate: no blocking operations and no shared
//! mutable state, so the engine is safe to invoke from any number of
//! concurrent callers. Two concurrent *callers* racing on overlapping
//! siblings can still produce a surprising final order (each computed its
//! key against a slightly different neighbor view); serializing reorder
//! requests per group is the caller's job.

pub mod engine;
pub mod error;
pub mod key;
pub mod orderable;

// Re-export core types for convenience
pub use engine::{compute_insertion_key, renumber, reorder, sort, sorted};
pub use error::OrderingError;
pub use key::SortKey;
pub use orderable::Orderable;
