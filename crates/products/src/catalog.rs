//! The list of products a view currently displays.

use std::collections::HashSet;

use storefront_core::{Entity, ProductId};

use crate::Product;

/// Ordered product list with unique identifiers.
///
/// Built from the last successful fetch; afterwards only shrinks through
/// [`ProductCatalog::remove`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from an API payload, keeping the first occurrence of
    /// each identifier.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut seen = HashSet::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());

        for product in products {
            if seen.insert(product.id().clone()) {
                unique.push(product);
            } else {
                tracing::warn!(product_id = %product.id, "dropping duplicate product from payload");
            }
        }

        Self { products: unique }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    /// Remove a product, returning it if it was listed.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        Some(self.products.remove(index))
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a ProductCatalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {id}"), 10.0, format!("https://img.example/{id}.jpg"))
    }

    #[test]
    fn keeps_payload_order() {
        let catalog = ProductCatalog::from_products(vec![product("b"), product("a"), product("c")]);
        let ids: Vec<_> = catalog.ids().into_iter().map(String::from).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn first_duplicate_wins() {
        let mut dup = product("a");
        dup.name = "Shadow".to_string();

        let catalog = ProductCatalog::from_products(vec![product("a"), dup, product("b")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::new("a")).unwrap().name, "Product a");
    }

    #[test]
    fn remove_drops_only_the_matching_product() {
        let mut catalog = ProductCatalog::from_products(vec![product("p1"), product("p2")]);

        let removed = catalog.remove(&ProductId::new("p1")).unwrap();

        assert_eq!(removed.id.as_str(), "p1");
        assert_eq!(catalog.ids(), vec![ProductId::new("p2")]);
    }

    #[test]
    fn remove_unknown_is_a_no_op() {
        let mut catalog = ProductCatalog::from_products(vec![product("p1")]);
        assert!(catalog.remove(&ProductId::new("nope")).is_none());
        assert_eq!(catalog.len(), 1);
    }

    proptest! {
        #[test]
        fn ids_are_unique_after_load_and_removals(
            ids in proptest::collection::vec("[a-e]", 0..20),
            removals in proptest::collection::vec("[a-e]", 0..5),
        ) {
            let mut catalog =
                ProductCatalog::from_products(ids.iter().map(|id| product(id)).collect());
            for id in &removals {
                catalog.remove(&ProductId::new(id.as_str()));
            }

            let listed = catalog.ids();
            let unique: HashSet<_> = listed.iter().collect();
            prop_assert_eq!(unique.len(), listed.len());

            for id in &removals {
                prop_assert!(catalog.get(&ProductId::new(id.as_str())).is_none());
            }
            for id in &listed {
                prop_assert!(ids.contains(&id.to_string()));
            }
        }
    }
}
