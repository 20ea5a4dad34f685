//! The dispatch entry point application code calls.

use std::sync::Arc;

use crate::engine::TransportEngine;
use crate::event::AnalyticsEvent;

/// Front door for recording analytics events.
///
/// Holds exactly one engine, injected at construction and fixed for the
/// dispatcher's lifetime. Swapping transports means building a new
/// dispatcher, which keeps the binding auditable.
///
/// [`AnalyticsDispatcher::log`] never blocks on transport completion
/// and never returns an error, so calling code (UI lifecycle hooks
/// included) can invoke it unconditionally with no error handling.
#[derive(Clone)]
pub struct AnalyticsDispatcher {
    engine: Arc<dyn TransportEngine>,
}

impl AnalyticsDispatcher {
    pub fn new(engine: Arc<dyn TransportEngine>) -> Self {
        Self { engine }
    }

    /// Record one event: encode it and hand it to the engine.
    ///
    /// Synchronous up to the hand-off; whatever I/O the engine does
    /// happens after this returns.
    pub fn log(&self, event: AnalyticsEvent) {
        let encoded = event.encode();
        tracing::debug!(name = %encoded.name, "dispatching analytics event");
        self.engine.send(encoded);
    }
}
