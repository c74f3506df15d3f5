use crate::product::{NewProduct, Product, ProductId};
use crate::update::{ProductEdit, ProductUpdate};
use crate::{CatalogError, CatalogResult};

/// In-memory product catalog. Owns the products and hands out ids.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    next_id: ProductId,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a product under the next free id and return a copy of it
    pub fn add_product(&mut self, draft: NewProduct) -> Product {
        let product = Product::from_draft(self.next_id, draft);
        self.products.push(product.clone());
        self.next_id += 1;

        tracing::debug!(product_id = product.id(), name = %product.name, "Product added");
        product
    }

    /// Apply a partial update to an existing product
    pub fn edit_product(
        &mut self,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> CatalogResult<ProductEdit> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or(CatalogError::NotFound(product_id))?;

        let applied = update.apply(product);
        tracing::debug!(product_id, ?applied, "Product edited");

        Ok(ProductEdit {
            product: product.clone(),
            applied,
        })
    }

    pub fn get_product_by_id(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }

    /// Like `get_product_by_id`, but absence is an error
    pub fn product(&self, product_id: ProductId) -> CatalogResult<&Product> {
        self.get_product_by_id(product_id)
            .ok_or(CatalogError::NotFound(product_id))
    }

    /// Products in `category` (exact match), in insertion order
    pub fn get_products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn get_all_products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<NewProduct> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = NewProduct>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for draft in iter {
            catalog.add_product(draft);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductField;

    fn grocery() -> ProductCatalog {
        [
            NewProduct::new("Apples", "Fruit", 1.2, 100.0),
            NewProduct::new("Bananas", "Fruit", 0.5, 120.0),
            NewProduct::new("Milk", "Drinks", 1.5, 1000.0),
            NewProduct::new("Bread", "Bakery", 0.8, 500.0),
            NewProduct::new("Cheese", "Dairy", 3.0, 200.0),
            NewProduct::new("Water", "Drinks", 0.5, 1500.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut catalog = ProductCatalog::new();
        let ids: Vec<ProductId> = (0..7)
            .map(|i| {
                catalog
                    .add_product(NewProduct::new(format!("Item {i}"), "Misc", 1.0, 1.0))
                    .id()
            })
            .collect();

        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
        assert_eq!(catalog.next_id(), 8);
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_add_product_keeps_insertion_order() {
        let mut catalog = grocery();
        catalog.add_product(NewProduct::new("Avocado", "Fruit", 2.0, 180.0));

        let names: Vec<&str> = catalog
            .get_all_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Apples", "Bananas", "Milk", "Bread", "Cheese", "Water", "Avocado"]
        );
    }

    #[test]
    fn test_edit_product_changes_only_supplied_fields() {
        let mut catalog = grocery();
        let before = catalog.get_product_by_id(5).unwrap().clone();

        let edit = catalog
            .edit_product(5, ProductUpdate::new().price(2.5))
            .unwrap();
        assert_eq!(edit.applied, vec![ProductField::Price]);

        let after = catalog.get_product_by_id(5).unwrap();
        assert_eq!(after.price, 2.5);
        assert_eq!(after.id(), before.id());
        assert_eq!(after.name, before.name);
        assert_eq!(after.category, before.category);
        assert_eq!(after.weight, before.weight);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_edit_product_ignores_unknown_fields() {
        let mut catalog = grocery();
        let (update, ignored) =
            ProductUpdate::from_pairs([("colour", "red"), ("description", "Mild")]).unwrap();

        let edit = catalog.edit_product(5, update).unwrap();
        assert_eq!(ignored, vec!["colour".to_string()]);
        assert_eq!(edit.applied, vec![ProductField::Description]);
        assert_eq!(edit.product.description, "Mild");
    }

    #[test]
    fn test_edit_missing_product() {
        let mut catalog = grocery();
        let result = catalog.edit_product(42, ProductUpdate::new().name("Ghost"));

        assert!(matches!(result, Err(CatalogError::NotFound(42))));
        assert_eq!(catalog.next_id(), 7);
    }

    #[test]
    fn test_lookup() {
        let catalog = grocery();

        assert_eq!(catalog.get_product_by_id(3).unwrap().name, "Milk");
        assert!(catalog.get_product_by_id(0).is_none());
        assert_eq!(catalog.product(99), Err(CatalogError::NotFound(99)));
    }

    #[test]
    fn test_products_by_category() {
        let catalog = grocery();

        let drinks: Vec<ProductId> = catalog
            .get_products_by_category("Drinks")
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(drinks, vec![3, 6]);
        assert!(catalog.get_products_by_category("drinks").is_empty());
        assert_eq!(catalog.categories(), ["Fruit", "Drinks", "Bakery", "Dairy"]);
    }
}
