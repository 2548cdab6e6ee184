//! The storefront session state: catalog, cart and event listeners.

use crate::cart::{Cart, CartItem, CartPricing};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::error::StoreError;
use crate::events::{CartEvent, CartListener};
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::Selection;
use std::fmt;

/// State for one shopping session.
///
/// Owns the catalog and the cart and is passed by reference to whichever
/// layer needs it. Mutators return the event they produced (`None` for a
/// no-op) after delivering it to every subscribed listener, so callers know to
/// re-read state.
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    listeners: Vec<Box<dyn CartListener>>,
}

impl Storefront {
    /// Start a session with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener for cart events.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Every product, in catalog order.
    pub fn list_all(&self) -> &[Product] {
        self.catalog.list_all()
    }

    /// Products matching a category and a case-insensitive name search.
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Product> {
        self.catalog.filter(category, query)
    }

    /// Products visible under a selection.
    pub fn select(&self, selection: &Selection) -> Vec<&Product> {
        self.catalog.select(selection)
    }

    /// Add one unit of `product` to the cart.
    pub fn add_to_cart(&mut self, product: &Product) -> CartEvent {
        let event = self.cart.add_item(product);
        self.dispatch(&event);
        event
    }

    /// Add one unit of the catalog product with this id.
    pub fn add_to_cart_by_id(&mut self, id: &ProductId) -> Result<CartEvent, StoreError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;
        Ok(self.add_to_cart(&product))
    }

    /// Remove a line from the cart. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Option<CartEvent> {
        let event = self.cart.remove_item(id)?;
        self.dispatch(&event);
        Some(event)
    }

    /// Shift a line's quantity, clamping at 1. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<CartEvent> {
        let event = self.cart.update_quantity(id, delta)?;
        self.dispatch(&event);
        Some(event)
    }

    /// Cart lines in insertion order.
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Unit price times quantity for one line.
    pub fn line_total(&self, item: &CartItem) -> Money {
        item.line_total()
    }

    /// Grand total of the cart.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Number of units in the cart.
    pub fn cart_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn cart_pricing(&self) -> CartPricing {
        self.cart.pricing()
    }

    fn dispatch(&mut self, event: &CartEvent) {
        for listener in &mut self.listeners {
            listener.on_cart_event(event);
        }
    }
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog)
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
