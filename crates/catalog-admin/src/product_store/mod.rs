//! # Product Table
//!
//! This module wires the [`Product`] model into the generic store.
//!
//! ## Overview
//!
//! Products reorder *within a category*: the sibling group is
//! `Option<CategoryId>`, with `None` being the uncategorized group. A
//! reorder request names both the product and the category group it is
//! expected to live in; a product absent from that group is reported as not
//! found, which is exactly the endpoint's 404 contract.
//!
//! ## Structure
//!
//! - [`entity`] - [`Orderable`](ordering_engine::Orderable) and
//!   [`StoreRecord`](crate::store::StoreRecord) implementations for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the table actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use crate::store::{StoreActor, StoreClient};

/// Creates a new Product table actor and its client.
pub fn new() -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(32)
}
