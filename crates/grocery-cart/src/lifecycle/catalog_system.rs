use crate::clients::{CatalogService, ProductClient};
use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::model::ProductFields;
use crate::session::CatalogSession;
use tracing::{error, info, warn};

/// Runs the product store and hands out sessions connected to it.
///
/// # Example
///
/// ```rust
/// use grocery_cart::config::AppConfig;
/// use grocery_cart::lifecycle::CatalogSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = CatalogSystem::new(&AppConfig::default());
///
///     let mut session = system.session();
///     session.refresh().await.map_err(|e| e.to_string())?;
///     assert!(session.catalog().is_empty());
///
///     drop(session);
///     system.shutdown().await
/// }
/// ```
pub struct CatalogSystem {
    /// Client for the product store. Clone it to share the store.
    pub product_client: ProductClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the product store actor. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config.buffer_size);
        let handle = tokio::spawn(product_actor.run(()));

        info!(buffer_size = config.buffer_size, "Catalog system started");
        Self {
            product_client,
            handle,
        }
    }

    /// Creates each product in order. Stops at the first rejected product and
    /// returns its error; products created before it stay in the store.
    pub async fn seed(&self, products: Vec<ProductFields>) -> Result<usize, CatalogError> {
        let total = products.len();
        for fields in products {
            let id = fields.id.clone();
            if let Err(e) = self.product_client.create_product(fields).await {
                warn!(%id, error = %e, "Seeding stopped");
                return Err(e);
            }
        }
        info!(products = total, "Catalog seeded");
        Ok(total)
    }

    /// A new, empty session backed by this system's store.
    pub fn session(&self) -> CatalogSession<ProductClient> {
        CatalogSession::new(self.product_client.clone())
    }

    /// Closes the store and waits for its task to finish.
    ///
    /// Every session handed out by [`session`](Self::session) holds a client and must
    /// be dropped first, or this waits forever.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Product store task failed: {:?}", e);
            return Err(format!("Product store task failed: {:?}", e));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
