//! Built-in demo catalog.

use crate::catalog::{Catalog, Category, Product};
use crate::money::Money;

fn image(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/600/600")
}

/// The SMART ONE accessory lineup shipped with the demo.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("1", "Clear Armor Case", Money::from_cents(2499), Category::Cases)
            .with_image(image("case-clear"))
            .with_rating(4.8)
            .with_description("Crystal-clear shock-absorbing case with raised camera lip.")
            .mark_new(),
        Product::new("2", "Leather Wallet Case", Money::from_cents(3999), Category::Cases)
            .with_image(image("case-leather"))
            .with_rating(4.6)
            .with_description("Full-grain leather folio with three card slots."),
        Product::new("3", "65W GaN Charger", Money::from_cents(4999), Category::Chargers)
            .with_image(image("charger-gan"))
            .with_rating(4.9)
            .with_description("Dual USB-C fast charger, PD 3.0, folds flat for travel.")
            .mark_new(),
        Product::new("4", "MagSafe Wireless Pad", Money::from_cents(3499), Category::Chargers)
            .with_image(image("charger-pad"))
            .with_rating(4.4)
            .with_description("15W magnetic wireless charging with aluminium base."),
        Product::new("5", "Braided USB-C Cable", Money::from_cents(1999), Category::Chargers)
            .with_image(image("cable-braided"))
            .with_rating(4.7)
            .with_description("2m nylon-braided cable rated for 100W."),
        Product::new("6", "Pro Wireless Earbuds", Money::from_cents(12999), Category::Audio)
            .with_image(image("audio-buds"))
            .with_rating(4.5)
            .with_description("Active noise cancelling with 30h total battery.")
            .mark_new(),
        Product::new("7", "Studio Headphones", Money::from_cents(19999), Category::Audio)
            .with_image(image("audio-studio"))
            .with_rating(4.3)
            .with_description("Over-ear, lossless wired and Bluetooth playback."),
        Product::new("8", "Tempered Glass Screen Guard", Money::from_cents(1499), Category::Protection)
            .with_image(image("protect-glass"))
            .with_rating(4.2)
            .with_description("9H hardness, bubble-free install kit included."),
        Product::new("9", "Camera Lens Protector", Money::from_cents(1299), Category::Protection)
            .with_image(image("protect-lens"))
            .with_rating(4.1)
            .with_description("Sapphire-coated rings for every rear lens."),
    ]
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Catalog::new(demo_products()).expect("demo catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let products = demo_products();
        let count = products.len();
        assert_eq!(Catalog::new(products).unwrap().len(), count);
        assert_eq!(Catalog::demo().len(), count);
    }

    #[test]
    fn test_demo_catalog_covers_every_category() {
        let catalog = Catalog::demo();
        for (category, count) in catalog.category_counts() {
            assert!(count > 0, "no products in {category}");
        }
    }
}
