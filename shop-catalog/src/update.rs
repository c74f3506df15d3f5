use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::product::Product;
use crate::{CatalogError, CatalogResult};

/// Editable product attributes. The id is not one of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Name,
    Category,
    Price,
    Weight,
    Description,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Name,
        ProductField::Category,
        ProductField::Price,
        ProductField::Weight,
        ProductField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Weight => "weight",
            ProductField::Description => "description",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name that is not an editable attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for ProductField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Partial update of a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build an update from textual `(field, value)` pairs.
    ///
    /// Unknown field names are skipped and returned alongside the update so
    /// callers can report them. A later pair for the same field wins.
    pub fn from_pairs<'a, I>(pairs: I) -> CatalogResult<(Self, Vec<String>)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut update = Self::new();
        let mut ignored = Vec::new();

        for (key, value) in pairs {
            let field = match key.parse::<ProductField>() {
                Ok(field) => field,
                Err(UnknownField(name)) => {
                    tracing::debug!(field = %name, "Ignoring unknown product field");
                    ignored.push(name);
                    continue;
                }
            };

            match field {
                ProductField::Name => update.name = Some(value.to_string()),
                ProductField::Category => update.category = Some(value.to_string()),
                ProductField::Price => update.price = Some(parse_number(field, value)?),
                ProductField::Weight => update.weight = Some(parse_number(field, value)?),
                ProductField::Description => update.description = Some(value.to_string()),
            }
        }

        Ok((update, ignored))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fields present in this update, in declaration order
    pub fn fields(&self) -> Vec<ProductField> {
        let present = [
            self.name.is_some(),
            self.category.is_some(),
            self.price.is_some(),
            self.weight.is_some(),
            self.description.is_some(),
        ];

        ProductField::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }

    /// Overwrite the supplied fields and return which ones were written
    pub(crate) fn apply(self, product: &mut Product) -> Vec<ProductField> {
        let applied = self.fields();

        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(weight) = self.weight {
            product.weight = weight;
        }
        if let Some(description) = self.description {
            product.description = description;
        }

        applied
    }
}

fn parse_number(field: ProductField, value: &str) -> CatalogResult<f64> {
    value.trim().parse().map_err(|_| CatalogError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

/// Result of a successful edit
#[derive(Debug, Clone, Serialize)]
pub struct ProductEdit {
    pub product: Product,
    pub applied: Vec<ProductField>,
}
