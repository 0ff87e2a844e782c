//! Header and server address resolution.
//!
//! # Responsibilities
//! - Merge the two gateway header encodings into one lower-cased map
//! - Drop the subprotocol header (subprotocols are not negotiated)
//! - Derive the server `(name, port)` from `host` and `x-forwarded-port`
//!
//! # Design Decisions
//! - The header encoding is picked once, by field presence, as a `HeaderShape`
//! - Keys colliding after lower-casing keep the first position and the last value
//! - An embedded `host:port` always wins over `x-forwarded-port`
//! - A port that does not parse is an error, never silently defaulted

use indexmap::IndexMap;

use crate::config::RequestDefaults;
use crate::error::{AdapterError, AdapterResult};
use crate::event::{MultiValue, SingleValue, TriggerPayload};

/// Lower-cased header name to value, in arrival order.
pub type HeaderMap = IndexMap<String, String>;

/// Server name and port.
pub type ServerAddr = (String, u16);

pub const HOST: &str = "host";
pub const X_FORWARDED_PORT: &str = "x-forwarded-port";
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const PATH: &str = "path";
pub const SEC_WEBSOCKET_PROTOCOL: &str = "sec-websocket-protocol";

/// Which header encoding the payload carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderShape<'a> {
    /// `multiValueHeaders`: every name maps to a list of values.
    Multi(&'a IndexMap<String, MultiValue>),
    /// `headers`: every name maps to one value.
    Single(&'a IndexMap<String, SingleValue>),
    Absent,
}

impl<'a> HeaderShape<'a> {
    /// Select the encoding. An empty map counts as absent, and the
    /// multi-value form is preferred when both are present.
    pub fn of(payload: &'a TriggerPayload) -> Self {
        match (&payload.multi_value_headers, &payload.headers) {
            (Some(multi), _) if !multi.is_empty() => HeaderShape::Multi(multi),
            (_, Some(single)) if !single.is_empty() => HeaderShape::Single(single),
            _ => HeaderShape::Absent,
        }
    }

    /// Flatten into a lower-cased header map.
    pub fn normalize(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match self {
            HeaderShape::Multi(multi) => {
                for (name, value) in multi {
                    let joined = match value {
                        MultiValue::Values(values) => values.join(", "),
                        MultiValue::Other(_) => String::new(),
                    };
                    headers.insert(name.to_lowercase(), joined);
                }
            }
            HeaderShape::Single(single) => {
                for (name, value) in single {
                    headers.insert(name.to_lowercase(), value.as_str().to_string());
                }
            }
            HeaderShape::Absent => {}
        }
        headers
    }
}

/// Resolve the server address and normalized headers of a payload.
pub fn resolve(
    payload: &TriggerPayload,
    defaults: &RequestDefaults,
) -> AdapterResult<(ServerAddr, HeaderMap)> {
    let mut headers = HeaderShape::of(payload).normalize();
    headers.shift_remove(SEC_WEBSOCKET_PROTOCOL);

    let server = server_addr(&headers, defaults)?;
    Ok((server, headers))
}

fn server_addr(headers: &HeaderMap, defaults: &RequestDefaults) -> AdapterResult<ServerAddr> {
    let host = headers
        .get(HOST)
        .map(String::as_str)
        .unwrap_or(&defaults.server_name);

    match host.split_once(':') {
        Some((name, port)) => Ok((name.to_string(), parse_port(port, host)?)),
        None => {
            let port = match headers.get(X_FORWARDED_PORT) {
                Some(forwarded) => parse_port(forwarded, forwarded)?,
                None => defaults.server_port,
            };
            Ok((host.to_string(), port))
        }
    }
}

fn parse_port(port: &str, value: &str) -> AdapterResult<u16> {
    port.trim()
        .parse()
        .map_err(|_| AdapterError::MalformedServerAddress {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> TriggerPayload {
        serde_json::from_value(value).unwrap()
    }

    fn defaults() -> RequestDefaults {
        RequestDefaults::default()
    }

    #[test]
    fn test_shape_selection() {
        let both = payload(json!({
            "multiValueHeaders": { "A": ["1"] },
            "headers": { "A": "1" }
        }));
        assert!(matches!(HeaderShape::of(&both), HeaderShape::Multi(_)));

        let empty_multi = payload(json!({
            "multiValueHeaders": {},
            "headers": { "A": "1" }
        }));
        assert!(matches!(HeaderShape::of(&empty_multi), HeaderShape::Single(_)));

        let empty_both = payload(json!({ "multiValueHeaders": {}, "headers": {} }));
        assert_eq!(HeaderShape::of(&empty_both), HeaderShape::Absent);
    }

    #[test]
    fn test_multi_value_join() {
        let p = payload(json!({
            "multiValueHeaders": {
                "Accept": ["text/plain", "application/json"],
                "X-Odd": "not-a-list"
            }
        }));
        let (_, headers) = resolve(&p, &defaults()).unwrap();

        assert_eq!(headers["accept"], "text/plain, application/json");
        assert_eq!(headers["x-odd"], "");
    }

    #[test]
    fn test_non_string_single_values() {
        let unused = payload(json!({
            "multiValueHeaders": { "Host": ["example.com"] },
            "headers": { "Host": "other.com", "X-Null": null }
        }));
        let (server, headers) = resolve(&unused, &defaults()).unwrap();
        assert_eq!(server, ("example.com".to_string(), 80));
        assert!(!headers.contains_key("x-null"));

        let used = payload(json!({
            "headers": { "Host": "example.com", "X-Null": null, "X-Flag": true }
        }));
        let (_, headers) = resolve(&used, &defaults()).unwrap();
        assert_eq!(headers["x-null"], "");
        assert_eq!(headers["x-flag"], "");
    }

    #[test]
    fn test_lowercase_collision_keeps_last_value() {
        let p = payload(json!({
            "headers": { "X-Id": "first", "Other": "o", "x-id": "second" }
        }));
        let (_, headers) = resolve(&p, &defaults()).unwrap();

        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (&"x-id".to_string(), &"second".to_string()),
                (&"other".to_string(), &"o".to_string()),
            ]
        );
    }

    #[test]
    fn test_drops_subprotocol() {
        let p = payload(json!({
            "headers": { "Sec-WebSocket-Protocol": "chat", "Host": "example.com" }
        }));
        let (_, headers) = resolve(&p, &defaults()).unwrap();

        assert!(!headers.contains_key(SEC_WEBSOCKET_PROTOCOL));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_server_defaults() {
        let (server, headers) = resolve(&TriggerPayload::default(), &defaults()).unwrap();
        assert_eq!(server, ("wsgate".to_string(), 80));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_server_from_forwarded_port() {
        let p = payload(json!({
            "headers": { "Host": "example.com", "X-Forwarded-Port": "443" }
        }));
        let (server, _) = resolve(&p, &defaults()).unwrap();
        assert_eq!(server, ("example.com".to_string(), 443));
    }

    #[test]
    fn test_embedded_port_wins() {
        let p = payload(json!({
            "headers": { "Host": "example.com:9000", "X-Forwarded-Port": "443" }
        }));
        let (server, _) = resolve(&p, &defaults()).unwrap();
        assert_eq!(server, ("example.com".to_string(), 9000));
    }

    #[test]
    fn test_embedded_port_ignores_bad_forwarded_port() {
        let p = payload(json!({
            "headers": { "Host": "example.com:9000", "X-Forwarded-Port": "nope" }
        }));
        let (server, _) = resolve(&p, &defaults()).unwrap();
        assert_eq!(server.1, 9000);
    }

    #[test]
    fn test_malformed_embedded_port() {
        for host in ["example.com:abc", "example.com:", "example.com:70000", "::1"] {
            let p = payload(json!({ "headers": { "Host": host } }));
            match resolve(&p, &defaults()) {
                Err(AdapterError::MalformedServerAddress { value }) => assert_eq!(value, host),
                other => panic!("expected malformed address for {host}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_forwarded_port() {
        let p = payload(json!({
            "headers": { "Host": "example.com", "X-Forwarded-Port": "https" }
        }));
        let err = resolve(&p, &defaults()).unwrap_err();
        assert!(matches!(
            err,
            AdapterError::MalformedServerAddress { ref value } if value == "https"
        ));
    }

    #[test]
    fn test_configured_fallbacks() {
        let defaults = RequestDefaults {
            server_name: "edge.internal".into(),
            server_port: 8443,
            ..RequestDefaults::default()
        };
        let (server, _) = resolve(&TriggerPayload::default(), &defaults).unwrap();
        assert_eq!(server, ("edge.internal".to_string(), 8443));
    }
}
