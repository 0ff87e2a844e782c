//! Trigger payload as delivered by the WebSocket gateway.
//!
//! Only the fields the adapter reads are typed; everything else stays in the
//! raw JSON kept alongside by [`TriggerEvent`].

use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AdapterResult;

/// Typed view of the gateway's proxy event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,

    /// Header name to every value sent under it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_value_headers: Option<IndexMap<String, MultiValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, SingleValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<PayloadBody>,

    /// Any JSON value, read by truthiness (`"true"`, `1`, `true` all count).
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_truthy"
    )]
    pub is_base64_encoded: Option<bool>,
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag),
        Value::Number(n) => Some(n.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(map) => Some(!map.is_empty()),
    })
}

impl TriggerPayload {
    /// Client address reported by the gateway, if any.
    pub fn source_ip(&self) -> Option<&str> {
        self.request_context
            .as_ref()?
            .identity
            .as_ref()?
            .source_ip
            .as_deref()
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }
}

/// Gateway request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

/// A `multiValueHeaders` entry.
///
/// The gateway sends a list of strings; anything else is kept so the resolver
/// can map it to an empty value instead of rejecting the whole event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MultiValue {
    Values(Vec<String>),
    Other(Value),
}

/// A `headers` entry.
///
/// Non-string values are kept rather than rejected; the resolver reads them
/// as empty, and they never matter when `multiValueHeaders` is in use.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SingleValue {
    Text(String),
    Other(Value),
}

impl SingleValue {
    pub fn as_str(&self) -> &str {
        match self {
            SingleValue::Text(text) => text,
            SingleValue::Other(_) => "",
        }
    }
}

impl From<&str> for SingleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Message body, either text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PayloadBody {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<&str> for PayloadBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PayloadBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for PayloadBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// A parsed trigger payload together with the raw JSON it came from.
///
/// The raw value is shared so every request built from this event can hand
/// it to downstream code without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent {
    payload: TriggerPayload,
    raw: Arc<Value>,
}

impl TriggerEvent {
    /// Parse an event from an already decoded JSON value.
    pub fn from_value(raw: Value) -> AdapterResult<Self> {
        let payload = TriggerPayload::deserialize(&raw)?;
        Ok(Self {
            payload,
            raw: Arc::new(raw),
        })
    }

    /// Parse an event from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> AdapterResult<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        Self::from_value(raw)
    }

    /// Wrap a payload built in code, rendering its raw JSON form.
    pub fn from_payload(payload: TriggerPayload) -> AdapterResult<Self> {
        let raw = serde_json::to_value(&payload)?;
        Ok(Self {
            payload,
            raw: Arc::new(raw),
        })
    }

    pub fn payload(&self) -> &TriggerPayload {
        &self.payload
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Shared handle to the raw event.
    pub fn raw_shared(&self) -> Arc<Value> {
        Arc::clone(&self.raw)
    }
}

impl FromStr for TriggerEvent {
    type Err = crate::error::AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
