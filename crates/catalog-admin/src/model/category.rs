//! Categories in the storefront catalog.
//!
//! Categories form a single sibling group: the admin dashboard shows all of
//! them in one drag-and-drop list, ordered by `sort`.

use ordering_engine::SortKey;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    /// Opaque display-order key. Written only by the ordering engine.
    pub sort: SortKey,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
        sort: SortKey,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            sort,
        }
    }
}

/// DTO for Category creation. The sort key is assigned by the store, which
/// places new categories last.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub slug: String,
}
