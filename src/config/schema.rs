//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the adapter.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdapterConfig {
    /// Fallback values used when the event omits connection metadata.
    pub request: RequestDefaults,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Defaults applied while normalizing an event into a request.
///
/// Each optional field of the trigger payload resolves to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// Server name reported when the event carries no `host` header.
    pub server_name: String,

    /// Server port when neither `host` nor `x-forwarded-port` supply one.
    pub server_port: u16,

    /// Scheme when `x-forwarded-proto` is absent.
    pub scheme: String,

    /// Path when the `path` header is absent.
    pub path: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            server_name: "wsgate".to_string(),
            server_port: 80,
            scheme: "wss".to_string(),
            path: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub json_logs: bool,

    /// Log the raw event and resolved path for every request.
    pub log_events: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            log_events: true,
        }
    }
}
