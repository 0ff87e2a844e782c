//! Invocation context passed alongside the trigger payload.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AdapterResult;

/// Runtime metadata about the current invocation.
///
/// The adapter never interprets it; it is carried on the request for
/// downstream code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InvocationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time_ms: Option<u64>,

    /// Any other fields the runtime supplied.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl InvocationContext {
    pub fn from_slice(bytes: &[u8]) -> AdapterResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
