//! Products in the storefront catalog.
//!
//! Products are ordered *within* their category: the sibling group of a
//! product is the set of products sharing its `category`, with
//! uncategorized products forming their own group keyed by `None`.

use crate::model::CategoryId;
use ordering_engine::SortKey;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Grouping key; `None` is the uncategorized group.
    pub category: Option<CategoryId>,
    /// Opaque display-order key. Written only by the ordering engine.
    pub sort: SortKey,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: Option<CategoryId>,
        sort: SortKey,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            sort,
        }
    }
}

/// DTO for Product creation. The sort key is assigned by the store, which
/// places new products last within their category group.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: Option<CategoryId>,
}
