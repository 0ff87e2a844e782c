//! Diagnostic sink for request building.
//!
//! The request builder reports what it received and what path it resolved
//! through a `RequestObserver` it is handed, rather than writing to a global
//! logger. The default observer discards everything.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ObservabilityConfig;

/// Receives the diagnostic records emitted while building a request.
pub trait RequestObserver: Send + Sync + std::fmt::Debug {
    /// Called with the raw event before any normalization.
    fn event_received(&self, _event: &Value) {}

    /// Called once the request path is known.
    fn path_resolved(&self, _path: &str) {}
}

/// Observer that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

/// Observer that forwards records to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn event_received(&self, event: &Value) {
        tracing::info!(event = %event, "Received gateway event");
    }

    fn path_resolved(&self, path: &str) {
        tracing::info!(path = %path, "Resolved request path");
    }
}

/// Pick the observer matching the observability settings.
pub fn observer_for(config: &ObservabilityConfig) -> Arc<dyn RequestObserver> {
    if config.log_events {
        Arc::new(TracingObserver)
    } else {
        Arc::new(NoopObserver)
    }
}
