pub mod product;
pub mod update;
pub mod catalog;

pub use product::{NewProduct, Product, ProductId};
pub use update::{ProductEdit, ProductField, ProductUpdate};
pub use catalog::ProductCatalog;

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue {
        field: ProductField,
        value: String,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
