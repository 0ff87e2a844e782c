//! Event handlers.
//!
//! # Responsibilities
//! - Recognize which gateway produced an event
//! - Expose the request, body and reply transformation for that event type
//!
//! # Design Decisions
//! - One `Handler` implementation per event type
//! - Inference only inspects the raw JSON, so it runs before any parsing
//! - An event no handler recognizes is an error, not a best-effort guess

pub mod ws_gateway;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{AdapterError, AdapterResult};
use crate::event::{InvocationContext, TriggerEvent};
use crate::http::{GatewayReply, Request, RequestBuilder, Response};

pub use ws_gateway::WsGateway;

/// Translation between one gateway event type and the canonical request/response.
pub trait Handler: Send + Sync + std::fmt::Debug {
    /// Returns true if `event` has the shape this handler understands.
    fn infer(event: &Value) -> bool
    where
        Self: Sized;

    /// Event type tag stamped on requests.
    fn event_type(&self) -> &'static str;

    /// Normalized request for the event.
    fn request(&self) -> AdapterResult<Request>;

    /// Decoded message body.
    fn body(&self) -> AdapterResult<Vec<u8>>;

    /// Gateway reply for an application response.
    fn transform_response(&self, response: &Response) -> GatewayReply;
}

/// Event type tag of the first handler that recognizes `event`.
pub fn infer_handler(event: &Value) -> AdapterResult<&'static str> {
    if WsGateway::infer(event) {
        return Ok(WsGateway::TYPE);
    }
    Err(AdapterError::UnsupportedEvent)
}

/// Parse `event` and wrap it in the handler that recognizes it.
pub fn handler_for(
    event: Value,
    context: Arc<InvocationContext>,
    builder: RequestBuilder,
) -> AdapterResult<Box<dyn Handler>> {
    match infer_handler(&event)? {
        WsGateway::TYPE => {
            let event = TriggerEvent::from_value(event)?;
            Ok(Box::new(WsGateway::new(event, context, builder)))
        }
        _ => Err(AdapterError::UnsupportedEvent),
    }
}
