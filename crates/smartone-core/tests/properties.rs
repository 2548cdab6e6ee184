use proptest::prelude::*;
use smartone_core::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Update(usize, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..8).prop_map(Op::Add),
        1 => (0usize..8).prop_map(Op::Remove),
        2 => (0usize..8, -20i64..20).prop_map(|(i, d)| Op::Update(i, d)),
    ]
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[a-cA-C ]{0,6}", 0i64..100_000, category()), 1..8).prop_map(
        |rows| {
            let products = rows
                .into_iter()
                .enumerate()
                .map(|(n, (name, cents, category))| {
                    Product::new(format!("p{n}"), name, Money::from_cents(cents), category)
                })
                .collect();
            Catalog::new(products).unwrap()
        },
    )
}

fn category_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "All", "Cases", "Chargers", "Audio", "Protection", "all", "Phones", "",
    ])
    .prop_map(str::to_string)
}

proptest! {
    /// Aggregates always equal the sums over the current lines, and the lines
    /// track a straightforward reference model.
    #[test]
    fn aggregates_follow_every_mutation(catalog in catalog(), ops in prop::collection::vec(op(), 0..60)) {
        let products = catalog.list_all().to_vec();
        let mut store = Storefront::new(catalog);
        let mut model: Vec<(ProductId, i64, u32)> = Vec::new();

        for op in ops {
            match op {
                Op::Add(i) => {
                    let product = &products[i % products.len()];
                    store.add_to_cart(product);
                    match model.iter_mut().find(|(id, _, _)| *id == product.id) {
                        Some(line) => line.2 += 1,
                        None => model.push((product.id.clone(), product.price.cents(), 1)),
                    }
                }
                Op::Remove(i) => {
                    let id = &products[i % products.len()].id;
                    store.remove_from_cart(id);
                    model.retain(|(m, _, _)| m != id);
                }
                Op::Update(i, delta) => {
                    let id = &products[i % products.len()].id;
                    store.update_quantity(id, delta);
                    if let Some(line) = model.iter_mut().find(|(m, _, _)| m == id) {
                        line.2 = (i64::from(line.2) + delta).max(1) as u32;
                    }
                }
            }

            let items = store.cart_items();
            let expected_total: i64 = items
                .iter()
                .map(|i| i.product().price.cents() * i64::from(i.quantity()))
                .sum();
            let expected_count: u64 = items.iter().map(|i| u64::from(i.quantity())).sum();
            prop_assert_eq!(store.cart_total().cents(), expected_total);
            prop_assert_eq!(store.cart_count(), expected_count);

            let ids: HashSet<&ProductId> = items.iter().map(|i| i.id()).collect();
            prop_assert_eq!(ids.len(), items.len());
            prop_assert!(items.iter().all(|i| i.quantity() >= 1));

            let actual: Vec<(ProductId, i64, u32)> = items
                .iter()
                .map(|i| (i.id().clone(), i.product().price.cents(), i.quantity()))
                .collect();
            prop_assert_eq!(&actual, &model);
        }
    }

    /// Filtering returns exactly the matching subsequence, in catalog order.
    #[test]
    fn filter_is_a_stable_subsequence(catalog in catalog(), name in category_name(), query in "[a-cA-C ]{0,3}") {
        let filter = CategoryFilter::parse(&name);
        let got: Vec<&ProductId> = catalog.filter(&filter, &query).iter().map(|p| &p.id).collect();

        let needle = query.to_lowercase();
        let expected: Vec<&ProductId> = catalog
            .list_all()
            .iter()
            .filter(|p| name == "All" || p.category.as_str() == name)
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&needle))
            .map(|p| &p.id)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Decrementing never drops a line, no matter how far.
    #[test]
    fn decrement_never_removes(adds in 1u32..10, delta in i64::MIN..0) {
        let product = Product::new("a", "Clear Case", Money::from_cents(1999), Category::Cases);
        let mut cart = Cart::new();
        for _ in 0..adds {
            cart.add_item(&product);
        }
        cart.update_quantity(&product.id, delta);

        let item = cart.get(&product.id);
        prop_assert!(item.is_some());
        let quantity = item.map(CartItem::quantity).unwrap_or_default();
        prop_assert_eq!(quantity, (i64::from(adds).saturating_add(delta)).max(1) as u32);
    }
}
