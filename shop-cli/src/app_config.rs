use serde::Deserialize;
use shop_cart::{SortAlgorithm, SortDirection, SortKey};
use shop_catalog::{NewProduct, ProductId};
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cart: CartConfig,
    #[serde(default)]
    pub sorting: SortingConfig,
}

/// Products loaded into the catalog at startup, in id order
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CartConfig {
    #[serde(default)]
    pub items: Vec<CartSeed>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CartSeed {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Defaults for `sort` and the demo run
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SortingConfig {
    #[serde(default = "default_key")]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default)]
    pub algorithm: SortAlgorithm,
}

fn default_key() -> SortKey {
    SortKey::Price
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            direction: SortDirection::default(),
            algorithm: SortAlgorithm::default(),
        }
    }
}

impl Config {
    /// Layered load from `dir`: `default`, then `$RUN_MODE`, then `local`,
    /// then `SHOP__*` environment variables.
    pub fn load(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg.. `SHOP__SORTING__KEY=weight`
            .add_source(config::Environment::with_prefix("SHOP").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
