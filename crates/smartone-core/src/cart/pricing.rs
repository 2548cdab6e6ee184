//! Cart pricing snapshots.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for a whole cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub grand_total: Money,
}

impl CartPricing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePricing {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub line_total: Money,
}
