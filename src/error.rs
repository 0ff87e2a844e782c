//! Adapter error definitions.

use thiserror::Error;

/// Errors that can occur while translating gateway events.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Host header or forwarded port carries a port that is not a valid number.
    #[error("Malformed server address: {value:?}")]
    MalformedServerAddress { value: String },

    /// Body flagged as base64 but could not be decoded.
    #[error("Invalid base64 body: {0}")]
    InvalidBase64Body(#[from] base64::DecodeError),

    /// Event JSON does not match the trigger payload shape.
    #[error("Invalid trigger payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// No handler recognizes the event.
    #[error("Unsupported event: no handler matched the trigger payload")]
    UnsupportedEvent,
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdapterError::MalformedServerAddress {
            value: "example.com:abc".into(),
        };
        assert_eq!(err.to_string(), "Malformed server address: \"example.com:abc\"");

        let err = AdapterError::UnsupportedEvent;
        assert!(err.to_string().contains("no handler matched"));
    }
}
