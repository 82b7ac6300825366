use crate::clients::{CategoryClient, ProductClient};
use tracing::{error, info};

/// The runtime orchestrator for the catalog reorder service.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both table actors
/// - **Handle Distribution**: Exposing the typed clients that all
///   collaborators receive explicitly (no module-scoped store handles)
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// let id = system.category_client.create_category(params).await?;
/// let key = system.category_client.reorder_category(id, 0).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the Category table
    pub category_client: CategoryClient,

    /// Client for the Product table
    pub product_client: ProductClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Creates and initializes a new `CatalogSystem` with both table
    /// actors running.
    pub fn new() -> Self {
        let (category_actor, category_store) = crate::category_store::new();
        let (product_actor, product_store) = crate::product_store::new();

        let category_handle = tokio::spawn(category_actor.run());
        let product_handle = tokio::spawn(product_actor.run());

        Self {
            category_client: CategoryClient::new(category_store),
            product_client: ProductClient::new(product_store),
            handles: vec![category_handle, product_handle],
        }
    }

    /// Gracefully shuts down the service.
    ///
    /// Drops both clients, which closes their channels; each actor drains
    /// its queue and exits. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");

        drop(self.category_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store actor task failed: {:?}", e);
                return Err(format!("Store actor task failed: {:?}", e));
            }
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
