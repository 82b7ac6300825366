//! Store trait implementations for the Category model.
//!
//! `Category` participates in fractional ordering through
//! [`Orderable`] and is managed by the generic
//! [`StoreActor`](crate::store::StoreActor) through [`StoreRecord`].

use crate::model::{Category, CategoryCreate, CategoryId};
use crate::store::StoreRecord;
use ordering_engine::{Orderable, SortKey};

impl Orderable for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn sort_key(&self) -> SortKey {
        self.sort
    }
}

impl StoreRecord for Category {
    /// All categories share one sibling group.
    type Group = ();
    type Create = CategoryCreate;

    fn from_create(id: CategoryId, params: CategoryCreate, sort: SortKey) -> Self {
        Category::new(id, params.name, params.slug, sort)
    }

    fn group(&self) -> Self::Group {}

    fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }
}
