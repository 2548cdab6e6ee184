//! Storefront error types.

use thiserror::Error;

/// Errors that can occur while building a catalog or resolving products.
///
/// Cart mutations never fail: operating on an id that is not in the cart is a
/// no-op, so none of these variants come out of the cart engine itself.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(String),

    /// Product id is empty.
    #[error("Product id must not be empty (product '{0}')")]
    EmptyProductId(String),

    /// Negative unit price.
    #[error("Invalid price for {product_id}: {cents} cents")]
    InvalidPrice { product_id: String, cents: i64 },

    /// Rating outside of [0, 5].
    #[error("Invalid rating for {product_id}: {rating} (expected 0 to 5)")]
    InvalidRating { product_id: String, rating: f32 },

    /// Category name outside the closed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Price string could not be parsed as a two-decimal amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Catalog file could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}
