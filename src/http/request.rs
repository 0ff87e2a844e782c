//! Canonical request construction.
//!
//! # Responsibilities
//! - Resolve headers and server address from the trigger payload
//! - Extract path, scheme and client address
//! - Decode the body
//! - Preserve the raw event and context for downstream code
//!
//! # Design Decisions
//! - A `Request` is built once per invocation and never mutated
//! - Building is pure apart from the injected observer; the same event
//!   always yields an equal request
//! - The query string is always empty: the gateway does not surface it on
//!   WebSocket messages

use std::sync::Arc;

use serde_json::Value;

use crate::config::RequestDefaults;
use crate::error::AdapterResult;
use crate::event::{InvocationContext, TriggerEvent};
use crate::http::body::decode_body;
use crate::http::headers::{self, ServerAddr, PATH, X_FORWARDED_PROTO};
use crate::observability::{NoopObserver, RequestObserver};

/// Event type tag for API Gateway WebSocket events.
pub const WS_GATEWAY_EVENT_TYPE: &str = "AWS_WS_GATEWAY";

/// Client address. The gateway never reports a source port, so it is 0.
pub type ClientAddr = (Option<String>, u16);

/// Protocol-agnostic request handed to the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Lower-cased header pairs, in arrival order.
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,
    pub path: String,
    pub scheme: String,
    /// Always empty for WebSocket gateway events.
    pub query_string: Vec<u8>,
    pub server: ServerAddr,
    pub client: ClientAddr,
    pub body: Vec<u8>,
    pub trigger_event: Arc<Value>,
    pub trigger_context: Arc<InvocationContext>,
    pub event_type: &'static str,
}

impl Request {
    /// First header value stored under `name` (already lower-cased).
    pub fn header(&self, name: &str) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(key, _)| key.as_slice() == name.as_bytes())
            .map(|(_, value)| value.as_slice())
    }
}

/// Builds [`Request`]s from gateway events.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    defaults: RequestDefaults,
    observer: Arc<dyn RequestObserver>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(RequestDefaults::default())
    }
}

impl RequestBuilder {
    /// Create a builder with the given defaults and a no-op observer.
    pub fn new(defaults: RequestDefaults) -> Self {
        Self {
            defaults,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Report diagnostic records to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Normalize one event into a request.
    pub fn build_request(
        &self,
        event: &TriggerEvent,
        context: Arc<InvocationContext>,
    ) -> AdapterResult<Request> {
        self.observer.event_received(event.raw());

        let payload = event.payload();
        let (server, headers) = headers::resolve(payload, &self.defaults)?;

        let path = headers
            .get(PATH)
            .cloned()
            .unwrap_or_else(|| self.defaults.path.clone());
        let scheme = headers
            .get(X_FORWARDED_PROTO)
            .cloned()
            .unwrap_or_else(|| self.defaults.scheme.clone());
        let client = (payload.source_ip().map(str::to_string), 0);
        let body = decode_body(payload)?;

        self.observer.path_resolved(&path);

        Ok(Request {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.into_bytes(), value.into_bytes()))
                .collect(),
            path,
            scheme,
            query_string: Vec::new(),
            server,
            client,
            body,
            trigger_event: event.raw_shared(),
            trigger_context: context,
            event_type: WS_GATEWAY_EVENT_TYPE,
        })
    }
}
