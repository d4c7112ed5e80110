//! Pagination cursor codec.
//!
//! A cursor is the base64 encoding of the UTF-8 JSON serialization of the
//! store's continuation-key mapping. The codec is format-agnostic: query and
//! scan continuation keys have different shapes but both round-trip through
//! it unchanged, so a cursor produced from one read path can be replayed to
//! resume it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// The store's native continuation key, as a JSON object.
pub type ContinuationKey = serde_json::Map<String, serde_json::Value>;

/// Errors produced when decoding a cursor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not valid base64")]
    Base64,
    #[error("cursor payload is not valid JSON")]
    Json,
    #[error("cursor payload is not a JSON object")]
    NotAnObject,
}

/// Encodes a continuation key as an opaque cursor string.
pub fn encode_cursor(key: &ContinuationKey) -> String {
    STANDARD.encode(serde_json::Value::Object(key.clone()).to_string())
}

/// Decodes a cursor string back into a continuation key.
pub fn decode_cursor(cursor: &str) -> Result<ContinuationKey, CursorError> {
    let bytes = STANDARD.decode(cursor).map_err(|_| CursorError::Base64)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|_| CursorError::Json)?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(CursorError::NotAnObject),
    }
}
