//! # Grocery Cart Demo
//!
//! Walks one session through the catalog workflow:
//! 1. Start the [`CatalogSystem`] and seed it, from `CATALOG_SEED` if set.
//! 2. Load the catalog, stage quantities and commit them to the cart.
//! 3. Edit a product through the form and submit it.
//! 4. Print the catalog and the cart.
//!
//! Configuration is read from the environment and from a `.env` file if present.

use grocery_cart::config::{load_seed, AppConfig};
use grocery_cart::lifecycle::{setup_tracing, CatalogSystem};
use grocery_cart::model::{ProductField, ProductFields};
use grocery_cart::view::{render_cart, render_catalog};
use tracing::{error, info, Instrument};

fn sample_products() -> Vec<ProductFields> {
    [
        ("0001", "Bananas", "Dole", "$0.49"),
        ("0002", "Whole Milk", "Horizon", "$4.29"),
        ("0003", "Sourdough Bread", "Boudin", "$6.50"),
    ]
    .into_iter()
    .map(|(id, name, brand, price)| ProductFields {
        id: id.into(),
        product_name: name.to_string(),
        brand: brand.to_string(),
        image: None,
        price: price.into(),
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting grocery cart");

    let products = match &config.seed_path {
        Some(path) => load_seed(path).map_err(|e| e.to_string())?,
        None => sample_products(),
    };

    let system = CatalogSystem::new(&config);
    system.seed(products).await.map_err(|e| e.to_string())?;

    let mut session = system.session();

    let span = tracing::info_span!("shopping");
    async {
        if let Err(e) = session.refresh().await {
            error!(error = %e, "Could not load catalog");
            return;
        }
        let Some(first) = session.catalog().products().first().cloned() else {
            info!("Catalog is empty");
            return;
        };

        session.increment(&first.id);
        session.increment(&first.id);
        if let Err(e) = session.commit_to_cart(&first.id) {
            error!(error = %e, "Commit failed");
        }
        // Nothing staged any more, so this one is refused.
        if let Err(e) = session.commit_to_cart(&first.id) {
            info!(error = %e, "Commit refused");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("editing");
    async {
        let Some(product) = session.catalog().products().last().cloned() else {
            return;
        };
        session.start_edit(&product);
        session.stage_field(ProductField::Price, "$5.99");
        match session.submit().await {
            Ok(message) => info!(%message, "Product saved"),
            Err(e) => error!(error = %e, "Product not saved"),
        }
    }
    .instrument(span)
    .await;

    for line in render_catalog(&session) {
        println!("{line}");
    }
    for line in render_cart(session.cart()) {
        println!("{line}");
    }

    drop(session);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
