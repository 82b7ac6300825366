//! Precision-exhaustion recovery, end to end: when repeated moves squeeze
//! two keys so close together that no f64 midpoint remains, the store
//! renumbers the group and retries the move once — callers never see the
//! recovery, only a valid key.

use catalog_admin::clients::catalog_client::CatalogClient;
use catalog_admin::lifecycle::CatalogSystem;
use catalog_admin::model::{CategoryCreate, CategoryId};
use ordering_engine::SortKey;

async fn seed(system: &CatalogSystem, names: &[&str]) -> Vec<CategoryId> {
    let mut ids = Vec::new();
    for name in names {
        let id = system
            .category_client
            .create_category(CategoryCreate {
                name: name.to_string(),
                slug: name.to_lowercase(),
            })
            .await
            .expect("Failed to create category");
        ids.push(id);
    }
    ids
}

/// Alternately moving two categories into the second slot bisects the gap
/// below the first category on every move. An f64 gap survives roughly a
/// thousand halvings, so 1500 moves forces at least one renumber cycle;
/// every request must still succeed and the order must stay consistent.
#[tokio::test]
async fn test_store_recovers_from_key_exhaustion() {
    let system = CatalogSystem::new();
    let ids = seed(&system, &["A", "B", "C"]).await;

    for round in 0..1500 {
        let order: Vec<CategoryId> = system
            .category_client
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|category| category.id)
            .collect();
        assert_eq!(order[0], ids[0], "A must stay first (round {round})");

        // Whichever of B/C is currently third gets moved up to slot 1.
        let moved = order[2];
        let key = system
            .category_client
            .reorder_category(moved, 1)
            .await
            .unwrap_or_else(|e| panic!("Reorder failed on round {round}: {e}"));

        // The returned key is the persisted one.
        let row = system
            .category_client
            .get(moved)
            .await
            .unwrap()
            .expect("Moved category missing");
        assert_eq!(row.sort, key);

        let order: Vec<CategoryId> = system
            .category_client
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|category| category.id)
            .collect();
        assert_eq!(order[1], moved, "Moved category must land in slot 1");
    }

    // After all that churn the keys are still strictly increasing.
    let keys: Vec<SortKey> = system
        .category_client
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|category| category.sort)
        .collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

    system.shutdown().await.unwrap();
}

/// Renumbering is invisible to other groups: exhausting keys among Prints
/// never rewrites a Merch row.
#[tokio::test]
async fn test_renumber_is_scoped_to_one_group() {
    use catalog_admin::model::ProductCreate;

    let system = CatalogSystem::new();
    let categories = seed(&system, &["Prints", "Merch"]).await;

    let mut prints = Vec::new();
    for name in ["Dawn", "Dusk", "Night"] {
        let id = system
            .product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price: 40.0,
                category: Some(categories[0]),
            })
            .await
            .unwrap();
        prints.push(id);
    }
    let merch_item = system
        .product_client
        .create_product(ProductCreate {
            name: "Sticker".to_string(),
            price: 4.0,
            category: Some(categories[1]),
        })
        .await
        .unwrap();
    let merch_key = system
        .product_client
        .list_products(Some(categories[1]))
        .await
        .unwrap()[0]
        .sort;

    // Grind the Prints group through at least one renumber cycle.
    for _ in 0..1500 {
        let order: Vec<_> = system
            .product_client
            .list_products(Some(categories[0]))
            .await
            .unwrap();
        let moved = order[2].id;
        system
            .product_client
            .reorder_product(moved, Some(categories[0]), 1)
            .await
            .expect("Reorder failed");
    }

    // The Merch row never moved and never got a new key.
    let merch = system
        .product_client
        .list_products(Some(categories[1]))
        .await
        .unwrap();
    assert_eq!(merch.len(), 1);
    assert_eq!(merch[0].id, merch_item);
    assert_eq!(merch[0].sort, merch_key);

    system.shutdown().await.unwrap();
}
