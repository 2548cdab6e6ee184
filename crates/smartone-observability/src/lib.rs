//! Observability for the SMART ONE storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging bound to a shopping session
//! - `CartEventLogger` - A cart listener that logs every cart change

mod listener;
mod logging;

pub use listener::*;
pub use logging::*;

// Re-export SessionId from smartone-core for convenience
pub use smartone_core::SessionId;
