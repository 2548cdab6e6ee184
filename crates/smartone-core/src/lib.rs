//! Catalog and cart state for the SMART ONE storefront.
//!
//! This crate is the state core behind the storefront shell:
//!
//! - **Catalog**: immutable products, categories, filtering
//! - **Search**: the shell's selection state (category + search text)
//! - **Cart**: cart lines, quantity rules, totals
//! - **Storefront**: one session's catalog, cart and event listeners
//!
//! Everything is synchronous and in memory. Nothing here does I/O.
//!
//! # Example
//!
//! ```rust
//! use smartone_core::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("a", "Clear Case", Money::from_cents(1999), Category::Cases),
//!     Product::new("b", "USB-C Charger", Money::from_cents(2999), Category::Chargers),
//! ])
//! .unwrap();
//! let mut store = Storefront::new(catalog);
//!
//! let hits: Vec<Product> = store
//!     .filter(&CategoryFilter::All, "case")
//!     .into_iter()
//!     .cloned()
//!     .collect();
//! assert_eq!(hits.len(), 1);
//!
//! store.add_to_cart(&hits[0]);
//! store.add_to_cart(&hits[0]);
//! assert_eq!(store.cart_total().to_string(), "$39.98");
//! assert_eq!(store.cart_count(), 2);
//! ```

pub mod error;
pub mod events;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::StoreError;
pub use ids::*;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::events::{CartEvent, CartListener};
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogFormat, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, LinePricing};

    // Search
    pub use crate::search::{Filter, Selection};
}
