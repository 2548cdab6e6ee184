//! Search module.
//!
//! Contains the catalog filters and the selection state the shell applies to
//! the catalog view.

mod filter;
mod selection;

pub use filter::Filter;
pub use selection::Selection;
