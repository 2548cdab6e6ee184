//! Product catalog module.
//!
//! Contains products, categories, the read-only catalog store and its file
//! formats.

mod category;
mod demo;
mod file;
mod product;
mod store;

pub use category::{Category, CategoryFilter};
pub use demo::demo_products;
pub use file::CatalogFormat;
pub use product::{Product, MAX_RATING};
pub use store::Catalog;
