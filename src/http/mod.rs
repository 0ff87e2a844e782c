//! Request/response translation subsystem.
//!
//! # Data Flow
//! ```text
//! TriggerEvent + InvocationContext
//!     → headers.rs (header shape, subprotocol drop, server address)
//!     → body.rs (base64 / text decoding)
//!     → request.rs (assemble canonical Request)
//!     → [application handles Request, returns Response]
//!     → response.rs (status-only GatewayReply)
//!     → back to the gateway
//! ```

pub mod body;
pub mod headers;
pub mod request;
pub mod response;

pub use body::decode_body;
pub use headers::{resolve, HeaderMap, HeaderShape, ServerAddr};
pub use request::{ClientAddr, Request, RequestBuilder, WS_GATEWAY_EVENT_TYPE};
pub use response::{to_gateway_reply, GatewayReply, Response};
