//! API Gateway WebSocket adapter.
//!
//! Translates WebSocket proxy events into a protocol-agnostic [`Request`] and
//! turns the application's [`Response`] back into the reply the gateway
//! expects.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod http;
pub mod observability;

pub use config::AdapterConfig;
pub use error::{AdapterError, AdapterResult};
pub use event::{InvocationContext, TriggerEvent};
pub use handler::{Handler, WsGateway};
pub use http::{GatewayReply, Request, RequestBuilder, Response};
