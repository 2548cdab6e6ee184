//! Catalog filter predicates.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category (`All` passes everything).
    Category(CategoryFilter),
    /// Case-insensitive substring search in the product name.
    Text(String),
}

impl Filter {
    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(filter) => filter.matches(product.category),
            Filter::Text(query) => product.name_contains(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;

    fn charger() -> Product {
        Product::new("b", "USB-C Charger", Money::from_cents(2999), Category::Chargers)
    }

    #[test]
    fn test_category_filter() {
        let category = |name: &str| Filter::Category(CategoryFilter::parse(name));
        assert!(category("Chargers").matches(&charger()));
        assert!(category("All").matches(&charger()));
        assert!(!category("Cases").matches(&charger()));
        assert!(!category("chargers").matches(&charger()));
    }

    #[test]
    fn test_text_filter() {
        let text = |query: &str| Filter::Text(query.to_string());
        assert!(text("usb-c").matches(&charger()));
        assert!(text("").matches(&charger()));
        assert!(!text("cable").matches(&charger()));
    }
}
