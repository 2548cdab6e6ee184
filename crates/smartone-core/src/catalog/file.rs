//! Catalog file formats.
//!
//! Catalog files are TOML (`[[products]]` tables) or JSON (`{"products": [...]}`).
//! Prices are written as decimal numbers or strings and converted to cents on
//! load; every record goes through `Catalog::new` validation.

use crate::catalog::{Catalog, Category, Product};
use crate::error::StoreError;
use crate::money::Money;
use serde::Deserialize;

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from a file name. Anything not ending in `.json` is TOML.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".json") {
            CatalogFormat::Json
        } else {
            CatalogFormat::Toml
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    price: PriceField,
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "isNew")]
    is_new: bool,
}

impl TryFrom<ProductRecord> for Product {
    type Error = StoreError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = match record.price {
            PriceField::Number(n) => Money::from_decimal(n)?,
            PriceField::Text(s) => Money::parse(&s)?,
        };
        let category: Category = record.category.parse()?;

        let mut product = Product::new(record.id, record.name, price, category)
            .with_image(record.image)
            .with_rating(record.rating)
            .with_description(record.description);
        product.is_new = record.is_new;
        Ok(product)
    }
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self, StoreError> {
        let file: CatalogFile = match format {
            CatalogFormat::Toml => toml::from_str(content)?,
            CatalogFormat::Json => serde_json::from_str(content)?,
        };
        let products = file
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(products)
    }
}
