use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-assigned product identifier
pub type ProductId = u32;

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub(crate) id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Weight in grams
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    pub(crate) fn from_draft(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            weight: draft.weight,
            description: draft.description,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Multi-line detail block
    pub fn details(&self) -> String {
        format!(
            "{}\nCategory: {}\nPrice: ${}\nWeight: {}g\nDescription: {}",
            self.name, self.category, self.price, self.weight, self.description
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ${} ({}, {}g)",
            self.name, self.price, self.category, self.weight
        )
    }
}

/// Draft of a product that has not been assigned an id yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            weight,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
