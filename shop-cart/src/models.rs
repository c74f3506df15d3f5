use serde::{Deserialize, Serialize};
use shop_catalog::{Product, ProductId};
use std::fmt;

/// A product in the cart together with its quantity.
///
/// The product is a snapshot taken from the catalog when the item was
/// resolved, so later catalog edits do not show up in an existing item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// Price of the whole line
    pub fn total_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    pub fn line(&self) -> CartLine {
        CartLine {
            product_id: self.product_id(),
            name: self.product.name.clone(),
            quantity: self.quantity,
            total: self.total_price(),
        }
    }
}

/// Display data for one cart row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub total: f64,
}

impl fmt::Display for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = ${}", self.name, self.quantity, self.total)
    }
}

/// Printable cart contents
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartListing {
    pub lines: Vec<CartLine>,
}

impl CartListing {
    pub const HEADER: &'static str = "=== YOUR CART ===";
    pub const EMPTY: &'static str = "Your cart is empty.";

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.total).sum()
    }
}

impl FromIterator<CartLine> for CartListing {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CartListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "{}", Self::EMPTY);
        }
        writeln!(f, "{}", Self::HEADER)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
