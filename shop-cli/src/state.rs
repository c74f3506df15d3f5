use anyhow::Context;
use shop_cart::{share_catalog, SharedCatalog, ShoppingCart};
use shop_catalog::ProductCatalog;

use crate::app_config::{Config, SortingConfig};

/// Catalog, cart and sort defaults for one run
pub struct AppState {
    pub catalog: SharedCatalog,
    pub cart: ShoppingCart,
    pub sorting: SortingConfig,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog: ProductCatalog = config.catalog.products.iter().cloned().collect();
        tracing::info!(products = catalog.len(), "Catalog seeded");

        let catalog = share_catalog(catalog);
        let mut cart = ShoppingCart::new(catalog.clone());
        for seed in &config.cart.items {
            cart.add_to_cart(seed.product_id, seed.quantity)
                .with_context(|| format!("Failed to seed cart with product {}", seed.product_id))?;
        }
        tracing::info!(items = cart.len(), "Cart seeded");

        Ok(Self {
            catalog,
            cart,
            sorting: config.sorting.clone(),
        })
    }
}
