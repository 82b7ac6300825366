//! # Category Table
//!
//! This module wires the [`Category`] model into the generic store.
//!
//! ## Overview
//!
//! Categories are the simpler of the two reorderable tables: every category
//! belongs to the one global sibling group, so the group key is `()` and
//! the admin dashboard's category list is just `list(())` in display order.
//!
//! ## Structure
//!
//! - [`entity`] - [`Orderable`](ordering_engine::Orderable) and
//!   [`StoreRecord`](crate::store::StoreRecord) implementations for [`Category`]
//! - [`error`] - [`CategoryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the table actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Category;
use crate::store::{StoreActor, StoreClient};

/// Creates a new Category table actor and its client.
pub fn new() -> (StoreActor<Category>, StoreClient<Category>) {
    StoreActor::new(32)
}
