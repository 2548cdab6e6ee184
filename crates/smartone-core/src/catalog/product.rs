//! Product type.

use crate::catalog::Category;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest possible rating.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; the cart copies them by
/// value and never needs to re-sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Catalog category.
    pub category: Category,
    /// Display image URL (not validated).
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Short description for listings.
    pub description: String,
    /// Whether to show the "new" badge.
    #[serde(default, alias = "is_new")]
    pub is_new: bool,
}

impl Product {
    /// Create a product with an empty image, description and zero rating.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            image: String::new(),
            rating: 0.0,
            description: String::new(),
            is_new: false,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flag the product as new.
    pub fn mark_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Number of whole stars to fill (floor of the rating).
    pub fn stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Case-insensitive substring match against the name.
    ///
    /// An empty needle matches every product.
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Check the field invariants a catalog entry must satisfy.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.as_str().is_empty() {
            return Err(StoreError::EmptyProductId(self.name.clone()));
        }
        if self.price.is_negative() {
            return Err(StoreError::InvalidPrice {
                product_id: self.id.to_string(),
                cents: self.price.cents(),
            });
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(StoreError::InvalidRating {
                product_id: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}
