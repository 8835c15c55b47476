//! Graph API error envelope
//!
//! Every Graph endpoint reports failures as
//! `{"error": {"message": ..., "type": ..., "code": ..., "error_subcode": ..., "fbtrace_id": ...}}`.
//! Both client operations decode non-200 bodies through [`GraphApiError::from_response`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured error reported by the Graph API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphApiError {
    /// Human-readable description; empty when the body could not be decoded
    #[serde(default)]
    pub message: String,
    /// Error class, e.g. `OAuthException`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fbtrace_id: Option<String>,
    /// HTTP status the error arrived with (not part of the wire payload)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl GraphApiError {
    /// Extract the error from a non-200 response body.
    ///
    /// Decoding is best-effort and field by field: a mistyped `code` or
    /// `fbtrace_id` is dropped without losing `message`. A body that is not a
    /// Graph error envelope yields an empty message and only the HTTP status.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).ok();
        let error = payload.as_ref().and_then(|value| value.get("error"));

        Self {
            message: string_field(error, "message").unwrap_or_default(),
            error_type: string_field(error, "type"),
            code: integer_field(error, "code"),
            error_subcode: integer_field(error, "error_subcode"),
            fbtrace_id: string_field(error, "fbtrace_id"),
            http_status: Some(status),
        }
    }
}

fn string_field(error: Option<&Value>, key: &str) -> Option<String> {
    error?.get(key)?.as_str().map(str::to_string)
}

// Numeric strings are accepted; Graph proxies occasionally quote codes.
fn integer_field(error: Option<&Value>, key: &str) -> Option<i64> {
    match error?.get(key)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
