//! Response handling and transformation.
//!
//! # Responsibilities
//! - Accept the application's response
//! - Reduce it to the reply the WebSocket gateway expects
//!
//! # Design Decisions
//! - The reply carries the status code only; headers and body are dropped
//! - Payloads meant for the client are pushed through the gateway's
//!   management API, which is outside this crate

use serde::{Deserialize, Serialize};

/// Response produced by the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Response with a status and nothing else.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

/// Reply returned to the gateway for a WebSocket invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayReply {
    pub status_code: u16,
}

/// Convert an application response into the gateway reply.
pub fn to_gateway_reply(response: &Response) -> GatewayReply {
    GatewayReply {
        status_code: response.status,
    }
}
