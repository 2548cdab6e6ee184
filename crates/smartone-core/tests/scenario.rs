//! End-to-end walk through a two-product catalog.

use smartone_core::prelude::*;

fn two_product_store() -> Storefront {
    let catalog = Catalog::new(vec![
        Product::new("a", "Clear Case", Money::parse("19.99").unwrap(), Category::Cases),
        Product::new("b", "USB-C Charger", Money::parse("29.99").unwrap(), Category::Chargers),
    ])
    .unwrap();
    Storefront::new(catalog)
}

#[test]
fn browse_add_adjust_remove() {
    let mut store = two_product_store();
    let a = ProductId::new("a");

    let hits: Vec<&str> = store
        .filter(&CategoryFilter::parse("All"), "case")
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(hits, vec!["a"]);

    let case = store.catalog().get(&a).unwrap().clone();
    store.add_to_cart(&case);
    store.add_to_cart(&case);
    assert_eq!(store.cart_items().len(), 1);
    assert_eq!(store.cart_items()[0].quantity(), 2);
    assert_eq!(store.cart_total(), Money::parse("39.98").unwrap());
    assert_eq!(store.cart_count(), 2);

    store.update_quantity(&a, -5);
    assert_eq!(store.cart_items()[0].quantity(), 1);
    assert_eq!(store.cart_total().to_string(), "$19.99");

    store.remove_from_cart(&a);
    assert!(store.cart_items().is_empty());
    assert_eq!(store.cart_total(), Money::ZERO);
    assert_eq!(store.cart_count(), 0);
}

#[test]
fn selection_drives_the_view() {
    let store = two_product_store();
    let mut selection = Selection::new();

    assert_eq!(store.select(&selection).len(), 2);

    selection.set_category(Category::Chargers);
    let visible: Vec<&str> = store.select(&selection).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(visible, vec!["USB-C Charger"]);

    selection.set_query("case");
    assert!(store.select(&selection).is_empty());

    selection.set_category(CategoryFilter::parse("Wearables"));
    selection.set_query("");
    assert!(store.select(&selection).is_empty());
}

#[test]
fn demo_catalog_session() {
    let mut store = Storefront::new(Catalog::demo());
    let audio = store.filter(&CategoryFilter::Only(Category::Audio), "");
    assert!(!audio.is_empty());
    assert!(audio.iter().all(|p| p.category == Category::Audio));

    let first = audio[0].id.clone();
    store.add_to_cart_by_id(&first).unwrap();
    assert_eq!(store.cart_count(), 1);
}
