//! Cart event logging.

use smartone_core::events::{CartEvent, CartListener};

use crate::logging::{LogBuilder, LogEntry, StructuredLogger};

/// Writes one structured log entry per cart event.
#[derive(Debug, Clone)]
pub struct CartEventLogger {
    logger: StructuredLogger,
}

impl CartEventLogger {
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }

    /// Build the entry for an event without writing it.
    pub fn entry_for(&self, event: &CartEvent) -> Option<LogEntry> {
        self.builder(event).build()
    }

    fn builder(&self, event: &CartEvent) -> LogBuilder<'_> {
        let builder = self
            .logger
            .info_builder(event.kind())
            .field("product_id", event.product_id().as_str())
            .field_bool("opens_cart", event.opens_cart());

        match event {
            CartEvent::ItemAdded { quantity, .. } | CartEvent::ItemRemoved { quantity, .. } => {
                builder.field_u64("quantity", u64::from(*quantity))
            }
            CartEvent::QuantityChanged { from, to, .. } => builder
                .field_u64("from", u64::from(*from))
                .field_u64("to", u64::from(*to)),
        }
    }
}

impl CartListener for CartEventLogger {
    fn on_cart_event(&mut self, event: &CartEvent) {
        self.builder(event).emit();
    }
}
