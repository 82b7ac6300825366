//! # Catalog Admin
//!
//! Demo entry point for the catalog reorder service.
//!
//! ## Core Components
//!
//! - **`ordering-engine`**: the pure fractional-ordering engine —
//!   one new key per move, renumbering as the rare recovery.
//! - **[`store`](catalog_admin::store)**: the actor-based persistence
//!   handle; one actor per table, reorders serialized per table.
//! - **[`clients`](catalog_admin::clients)**: the typed reorder
//!   collaborators for categories and products.
//! - **[`lifecycle`](catalog_admin::lifecycle)**: orchestration and
//!   tracing setup.
//!
//! The flow below mirrors what the admin dashboard does: seed the catalog,
//! drag a category to the front, drag a product within its category, and
//! read back the resulting display orders.

use catalog_admin::lifecycle::{setup_tracing, CatalogSystem};
use catalog_admin::model::{CategoryCreate, ProductCreate};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting catalog admin demo");

    let system = CatalogSystem::new();

    // Seed three categories; creation places each one last.
    let mut category_ids = Vec::new();
    for (name, slug) in [
        ("Prints", "prints"),
        ("Originals", "originals"),
        ("Merch", "merch"),
    ] {
        let id = system
            .category_client
            .create_category(CategoryCreate {
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(category_id = %id, name, "Category created");
        category_ids.push(id);
    }

    // Drag the last category to the front: one key written, two untouched.
    let span = tracing::info_span!("category_reorder");
    let new_key = async {
        info!("Moving Merch to the front");
        system
            .category_client
            .reorder_category(category_ids[2], 0)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(sort = %new_key, "Category reordered");

    let names: Vec<String> = system
        .category_client
        .list_categories()
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|category| category.name)
        .collect();
    info!(?names, "Categories in display order");

    // Seed products into the first category and reorder within the group.
    let prints = category_ids[0];
    let mut product_ids = Vec::new();
    for (name, price) in [("Dawn", 40.0), ("Dusk", 40.0), ("Night", 55.0)] {
        let id = system
            .product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price,
                category: Some(prints),
            })
            .await
            .map_err(|e| e.to_string())?;
        product_ids.push(id);
    }

    let span = tracing::info_span!("product_reorder");
    let new_key = async {
        info!("Moving Night to the front of Prints");
        system
            .product_client
            .reorder_product(product_ids[2], Some(prints), 0)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(sort = %new_key, "Product reordered");

    let names: Vec<String> = system
        .product_client
        .list_products(Some(prints))
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|product| product.name)
        .collect();
    info!(?names, "Prints in display order");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
