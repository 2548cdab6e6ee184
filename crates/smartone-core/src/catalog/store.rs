//! The read-only catalog store.

use crate::catalog::{Category, CategoryFilter, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::search::Selection;
use std::collections::HashSet;

/// An immutable list of products, in insertion order.
///
/// Construction validates every product and rejects duplicate ids, so any
/// `Catalog` value in hand satisfies the catalog invariants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(&product.id) {
                return Err(StoreError::DuplicateProductId(product.id.to_string()));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Every product, in catalog order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Products in `category` whose name contains `query`, ignoring case.
    ///
    /// Catalog order is preserved.
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Product> {
        let selection = Selection::new()
            .with_category(category.clone())
            .with_query(query);
        self.select(&selection)
    }

    /// Products matching a shell-owned selection.
    pub fn select(&self, selection: &Selection) -> Vec<&Product> {
        let filters = selection.filters();
        self.products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products per category, in navigation order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
