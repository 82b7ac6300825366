//! Pure data structures for the catalog: categories and products, each
//! carrying the opaque `sort` key owned by the ordering engine.

pub mod category;
pub mod product;

pub use category::{Category, CategoryCreate, CategoryId};
pub use product::{Product, ProductCreate, ProductId};
