//! Cart events and listeners.
//!
//! Every cart mutation that changes state yields a [`CartEvent`]. The event is
//! returned to the caller and handed to each subscribed [`CartListener`]. UI
//! reactions, such as opening the cart drawer after an add, hang off these
//! events instead of living in the cart state.

use crate::ids::ProductId;
use serde::Serialize;

/// A change to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CartEvent {
    /// A product was added; `quantity` is the line's quantity afterwards.
    ItemAdded { product_id: ProductId, quantity: u32 },
    /// A line was removed; `quantity` is what it held.
    ItemRemoved { product_id: ProductId, quantity: u32 },
    /// A line's quantity changed.
    QuantityChanged {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
}

impl CartEvent {
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. }
            | CartEvent::QuantityChanged { product_id, .. } => product_id,
        }
    }

    /// Whether the shell should show the cart in response.
    pub fn opens_cart(&self) -> bool {
        matches!(self, CartEvent::ItemAdded { .. })
    }

    /// Short machine-readable name.
    pub fn kind(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::QuantityChanged { .. } => "quantity_changed",
        }
    }
}

/// Receives cart events after the mutation has been applied.
pub trait CartListener {
    fn on_cart_event(&mut self, event: &CartEvent);
}

impl<F> CartListener for F
where
    F: FnMut(&CartEvent),
{
    fn on_cart_event(&mut self, event: &CartEvent) {
        (*self)(event)
    }
}
