use parking_lot::RwLock;
use shop_catalog::{ProductCatalog, ProductId};
use std::sync::Arc;

use crate::models::{CartItem, CartLine, CartListing};

/// Catalog handle shared between the owner of the catalog and its carts
pub type SharedCatalog = Arc<RwLock<ProductCatalog>>;

pub fn share_catalog(catalog: ProductCatalog) -> SharedCatalog {
    Arc::new(RwLock::new(catalog))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CartEntry {
    product_id: ProductId,
    quantity: u32,
}

/// Shopping cart referencing catalog products by id
pub struct ShoppingCart {
    catalog: SharedCatalog,
    entries: Vec<CartEntry>,
}

impl ShoppingCart {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// A product already in the cart has its quantity increased instead of
    /// getting a second row.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> CartResult<()> {
        if quantity == 0 {
            tracing::warn!(product_id, "Rejected cart add with zero quantity");
            return Err(CartError::InvalidQuantity(quantity));
        }

        if self.catalog.read().get_product_by_id(product_id).is_none() {
            tracing::warn!(product_id, "Rejected cart add for unknown product");
            return Err(CartError::ProductNotFound(product_id));
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity = entry.quantity.checked_add(quantity).ok_or(
                CartError::QuantityOverflow {
                    product_id,
                    current: entry.quantity,
                    added: quantity,
                },
            )?;
            tracing::debug!(product_id, quantity = entry.quantity, "Cart item merged");
            return Ok(());
        }

        self.entries.push(CartEntry {
            product_id,
            quantity,
        });
        tracing::debug!(product_id, quantity, "Cart item added");
        Ok(())
    }

    pub fn add_one(&mut self, product_id: ProductId) -> CartResult<()> {
        self.add_to_cart(product_id, 1)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(|e| e.quantity)
    }

    /// Independent list of the cart's items, in cart order.
    ///
    /// Reordering the returned vector never affects the cart.
    pub fn get_items_for_sorting(&self) -> CartResult<Vec<CartItem>> {
        let catalog = self.catalog.read();
        self.entries
            .iter()
            .map(|entry| {
                catalog
                    .get_product_by_id(entry.product_id)
                    .map(|product| CartItem::new(product.clone(), entry.quantity))
                    .ok_or(CartError::DanglingProduct(entry.product_id))
            })
            .collect()
    }

    /// `(name, quantity, total)` rows in cart order
    pub fn lines(&self) -> CartResult<Vec<CartLine>> {
        Ok(self
            .get_items_for_sorting()?
            .iter()
            .map(CartItem::line)
            .collect())
    }

    pub fn listing(&self) -> CartResult<CartListing> {
        Ok(CartListing {
            lines: self.lines()?,
        })
    }

    pub fn total(&self) -> CartResult<f64> {
        Ok(self.listing()?.total())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Cart references product {0}, which is no longer in the catalog")]
    DanglingProduct(ProductId),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Quantity overflow for product {product_id}: {current} + {added}")]
    QuantityOverflow {
        product_id: ProductId,
        current: u32,
        added: u32,
    },
}

pub type CartResult<T> = Result<T, CartError>;
