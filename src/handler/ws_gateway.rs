//! API Gateway WebSocket handler.

use std::sync::Arc;

use serde_json::Value;

use crate::error::AdapterResult;
use crate::event::{InvocationContext, TriggerEvent};
use crate::handler::Handler;
use crate::http::{
    decode_body, to_gateway_reply, GatewayReply, Request, RequestBuilder, Response,
    WS_GATEWAY_EVENT_TYPE,
};

/// Handles API Gateway WebSocket proxy events.
#[derive(Debug, Clone)]
pub struct WsGateway {
    event: TriggerEvent,
    context: Arc<InvocationContext>,
    builder: RequestBuilder,
}

impl WsGateway {
    pub const TYPE: &'static str = WS_GATEWAY_EVENT_TYPE;

    pub fn new(
        event: TriggerEvent,
        context: Arc<InvocationContext>,
        builder: RequestBuilder,
    ) -> Self {
        Self {
            event,
            context,
            builder,
        }
    }

    pub fn event(&self) -> &TriggerEvent {
        &self.event
    }

    pub fn context(&self) -> &InvocationContext {
        &self.context
    }
}

impl Handler for WsGateway {
    /// WebSocket events carry a connection id in their request context.
    fn infer(event: &Value) -> bool {
        event
            .get("requestContext")
            .and_then(Value::as_object)
            .is_some_and(|ctx| ctx.contains_key("connectionId"))
    }

    fn event_type(&self) -> &'static str {
        Self::TYPE
    }

    fn request(&self) -> AdapterResult<Request> {
        self.builder.build_request(&self.event, Arc::clone(&self.context))
    }

    fn body(&self) -> AdapterResult<Vec<u8>> {
        decode_body(self.event.payload())
    }

    fn transform_response(&self, response: &Response) -> GatewayReply {
        to_gateway_reply(response)
    }
}
