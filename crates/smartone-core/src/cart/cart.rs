//! Cart and cart item types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Product;
use crate::events::CartEvent;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Smallest quantity a cart line can hold.
pub const MIN_QUANTITY: u32 = 1;

/// A product in the cart together with its quantity.
///
/// Serializes as the product's fields plus `quantity`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: MIN_QUANTITY,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Quantity, always at least [`MIN_QUANTITY`].
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// The shopping cart: one line per distinct product, in the order products
/// were first added.
///
/// Totals are recomputed from the lines on every read. There are no running
/// counters to fall out of step with the items.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart has its quantity raised by one and keeps
    /// its original fields; otherwise a new line with quantity 1 is appended.
    pub fn add_item(&mut self, product: &Product) -> CartEvent {
        let quantity = match self.position(&product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.push(CartItem::new(product.clone()));
                MIN_QUANTITY
            }
        };
        tracing::debug!(product_id = %product.id, quantity, "cart item added");
        self.check_invariants();

        CartEvent::ItemAdded {
            product_id: product.id.clone(),
            quantity,
        }
    }

    /// Remove a product's line. Returns `None` if it was not in the cart.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartEvent> {
        let Some(index) = self.position(id) else {
            tracing::debug!(product_id = %id, "remove ignored, not in cart");
            return None;
        };
        let removed = self.items.remove(index);
        tracing::debug!(product_id = %id, quantity = removed.quantity, "cart item removed");
        self.check_invariants();

        Some(CartEvent::ItemRemoved {
            product_id: removed.product.id,
            quantity: removed.quantity,
        })
    }

    /// Shift a line's quantity by `delta`, never going below [`MIN_QUANTITY`].
    ///
    /// Decrementing never removes a line; that takes an explicit
    /// [`remove_item`](Self::remove_item). Returns `None` if the product is not
    /// in the cart or the quantity did not change.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<CartEvent> {
        let Some(index) = self.position(id) else {
            tracing::debug!(product_id = %id, delta, "quantity update ignored, not in cart");
            return None;
        };
        let item = &mut self.items[index];
        let from = item.quantity;
        let to = i64::from(from)
            .saturating_add(delta)
            .clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX)) as u32;
        if to == from {
            tracing::debug!(product_id = %id, delta, quantity = from, "quantity update ignored, unchanged");
            return None;
        }
        item.quantity = to;
        tracing::debug!(product_id = %id, from, to, "cart quantity changed");
        self.check_invariants();

        Some(CartEvent::QuantityChanged {
            product_id: id.clone(),
            from,
            to,
        })
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of every line and the aggregates, for rendering.
    pub fn pricing(&self) -> CartPricing {
        let lines = self
            .items
            .iter()
            .map(|item| LinePricing {
                product_id: item.id().clone(),
                name: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        CartPricing {
            lines,
            item_count: self.item_count(),
            grand_total: self.total(),
        }
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.items.iter().all(|i| i.quantity >= MIN_QUANTITY),
            "cart line with zero quantity"
        );
        debug_assert!(
            self.items
                .iter()
                .enumerate()
                .all(|(n, a)| self.items[..n].iter().all(|b| b.id() != a.id())),
            "duplicate product id in cart"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn clear_case() -> Product {
        Product::new("a", "Clear Case", Money::from_cents(1999), Category::Cases)
    }

    fn charger() -> Product {
        Product::new("b", "USB-C Charger", Money::from_cents(2999), Category::Chargers)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let event = cart.add_item(&clear_case());

        assert_eq!(
            event,
            CartEvent::ItemAdded {
                product_id: ProductId::new("a"),
                quantity: 1
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        let event = cart.add_item(&clear_case());

        assert!(matches!(event, CartEvent::ItemAdded { quantity: 2, .. }));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().cents(), 3998);
    }

    #[test]
    fn test_readd_keeps_original_fields() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        let renamed = Product::new("a", "Renamed", Money::from_cents(1), Category::Audio);
        cart.add_item(&renamed);

        let item = cart.get(&ProductId::new("a")).unwrap();
        assert_eq!(item.product().name, "Clear Case");
        assert_eq!(item.product().price.cents(), 1999);
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&charger());
        cart.add_item(&clear_case());
        cart.add_item(&charger());

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());

        let event = cart.update_quantity(&ProductId::new("a"), 4);
        assert_eq!(
            event,
            Some(CartEvent::QuantityChanged {
                product_id: ProductId::new("a"),
                from: 1,
                to: 5
            })
        );
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        let id = ProductId::new("a");
        cart.add_item(&clear_case());
        cart.update_quantity(&id, 2);

        let event = cart.update_quantity(&id, -100);
        assert!(matches!(event, Some(CartEvent::QuantityChanged { from: 3, to: 1, .. })));
        assert_eq!(cart.get(&id).unwrap().quantity(), 1);

        // Already at the floor: nothing changes, the line stays.
        assert_eq!(cart.update_quantity(&id, -1), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_extreme_deltas() {
        let mut cart = Cart::new();
        let id = ProductId::new("a");
        cart.add_item(&clear_case());

        cart.update_quantity(&id, i64::MIN);
        assert_eq!(cart.get(&id).unwrap().quantity(), 1);

        cart.update_quantity(&id, i64::MAX);
        assert_eq!(cart.get(&id).unwrap().quantity(), u32::MAX);
        assert_eq!(cart.item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        let before = cart.clone();

        assert_eq!(cart.remove_item(&ProductId::new("zzz")), None);
        assert_eq!(cart.update_quantity(&ProductId::new("zzz"), 3), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        cart.add_item(&charger());
        cart.update_quantity(&ProductId::new("a"), 2);

        let event = cart.remove_item(&ProductId::new("a"));
        assert_eq!(
            event,
            Some(CartEvent::ItemRemoved {
                product_id: ProductId::new("a"),
                quantity: 3
            })
        );
        assert!(cart.get(&ProductId::new("a")).is_none());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total().cents(), 2999);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        cart.add_item(&clear_case());
        cart.add_item(&charger());

        let pricing = cart.pricing();
        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.lines[0].line_total.cents(), 3998);
        assert_eq!(pricing.lines[1].line_total.cents(), 2999);
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.grand_total.cents(), 6997);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let mut cart = Cart::new();
        cart.add_item(&clear_case());
        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["name"], "Clear Case");
        assert_eq!(json["quantity"], 1);
    }
}
