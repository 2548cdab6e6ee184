//! Shopping cart module.
//!
//! Contains the cart engine, its items and pricing snapshots.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem, MIN_QUANTITY};
pub use pricing::{CartPricing, LinePricing};
