//! Message body decoding.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::AdapterResult;
use crate::event::{PayloadBody, TriggerPayload};

/// Standard alphabet, padding required, non-zero trailing bits accepted.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode the payload body into raw bytes.
///
/// A missing body is empty. When the gateway flags the body as base64 it is
/// decoded with the standard alphabet, ignoring ASCII whitespace such as
/// line breaks; otherwise text is taken as UTF-8.
pub fn decode_body(payload: &TriggerPayload) -> AdapterResult<Vec<u8>> {
    let Some(body) = &payload.body else {
        return Ok(Vec::new());
    };

    if payload.is_base64_encoded() {
        let encoded: &[u8] = match body {
            PayloadBody::Text(text) => text.as_bytes(),
            PayloadBody::Bytes(bytes) => bytes,
        };
        let compact: Vec<u8> = encoded
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        return Ok(BASE64.decode(compact)?);
    }

    Ok(match body {
        PayloadBody::Text(text) => text.clone().into_bytes(),
        PayloadBody::Bytes(bytes) => bytes.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdapterError;

    fn payload(body: Option<PayloadBody>, base64: Option<bool>) -> TriggerPayload {
        TriggerPayload {
            body,
            is_base64_encoded: base64,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_body_is_empty() {
        assert!(decode_body(&payload(None, None)).unwrap().is_empty());
        assert!(decode_body(&payload(None, Some(true))).unwrap().is_empty());
    }

    #[test]
    fn test_text_body() {
        let body = decode_body(&payload(Some("hello".into()), None)).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_text_body_is_utf8() {
        let body = decode_body(&payload(Some("héllo".into()), Some(false))).unwrap();
        assert_eq!(body, "héllo".as_bytes());
    }

    #[test]
    fn test_byte_body_passes_through() {
        let raw = vec![0u8, 159, 146, 150];
        let body = decode_body(&payload(Some(raw.clone().into()), None)).unwrap();
        assert_eq!(body, raw);
    }

    #[test]
    fn test_base64_body() {
        let body = decode_body(&payload(Some("aGVsbG8=".into()), Some(true))).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_base64_byte_body() {
        let body = decode_body(&payload(Some(b"aGVsbG8=".to_vec().into()), Some(true))).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_base64_trailing_bits_accepted() {
        let body = decode_body(&payload(Some("aGVsbG9=".into()), Some(true))).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_base64_ignores_line_breaks() {
        for encoded in ["aGVs\nbG8=", "aGVs\r\nbG8=\n", " aGVsbG8= "] {
            let body = decode_body(&payload(Some(encoded.into()), Some(true))).unwrap();
            assert_eq!(body, b"hello", "input {encoded:?}");
        }
    }

    #[test]
    fn test_base64_wrong_padding_rejected() {
        for encoded in ["aGVsbG8", "aGVsbG8==", "aGVsbA="] {
            let err = decode_body(&payload(Some(encoded.into()), Some(true))).unwrap_err();
            assert!(matches!(err, AdapterError::InvalidBase64Body(_)), "input {encoded:?}");
        }
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_body(&payload(Some("not base64!".into()), Some(true))).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidBase64Body(_)));
    }
}
