//! Store trait implementations for the Product model.

use crate::model::{CategoryId, Product, ProductCreate, ProductId};
use crate::store::StoreRecord;
use ordering_engine::{Orderable, SortKey};

impl Orderable for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn sort_key(&self) -> SortKey {
        self.sort
    }
}

impl StoreRecord for Product {
    /// Products group by category; `None` is the uncategorized group.
    type Group = Option<CategoryId>;
    type Create = ProductCreate;

    fn from_create(id: ProductId, params: ProductCreate, sort: SortKey) -> Self {
        Product::new(id, params.name, params.price, params.category, sort)
    }

    fn group(&self) -> Self::Group {
        self.category
    }

    fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }
}
