//! Typed client wrappers over the generic store: one per table, plus the
//! shared [`CatalogClient`] trait providing the standard operations.

pub mod catalog_client;
pub mod category_client;
pub mod product_client;

pub use catalog_client::CatalogClient;
pub use category_client::CategoryClient;
pub use product_client::ProductClient;
