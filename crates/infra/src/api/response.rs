//! Response body parsing and error normalization

use plantview_domain::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::http::RawResponse;

/// Fields consulted, in order, for a human-readable failure message.
const MESSAGE_FIELDS: [&str; 3] = ["message", "detail", "error"];

/// A response whose body has been parsed leniently into JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl ResponseEnvelope {
    /// Parse `raw`'s body; never fails.
    ///
    /// Empty bodies become `null`; bodies that are not JSON become
    /// `{"message": <raw text>}`.
    pub fn from_raw(raw: RawResponse) -> Self {
        Self { status: raw.status, status_text: raw.status_text, body: parse_body(&raw.body) }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// First non-empty `message`, `detail` or `error` field, else the status
    /// text.
    pub fn message(&self) -> String {
        extract_message(&self.body).unwrap_or_else(|| {
            if self.status_text.is_empty() {
                format!("Request failed with status {}", self.status)
            } else {
                self.status_text.clone()
            }
        })
    }

    /// Normalized error for a non-2xx response.
    pub fn into_error(self) -> ApiError {
        let message = self.message();
        ApiError::from_status(self.status, message)
    }

    /// Decode a 2xx body as `T`, or normalize a failure.
    ///
    /// # Errors
    /// Returns the normalized error for non-2xx responses, and a protocol
    /// error when a 2xx body does not match `T`.
    pub fn into_result<T: DeserializeOwned>(self) -> ApiResult<T> {
        if !self.is_success() {
            return Err(self.into_error());
        }
        let status = self.status;
        serde_json::from_value(self.body).map_err(|err| {
            ApiError::protocol(status, format!("Unexpected response body: {err}"))
        })
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

fn extract_message(body: &Value) -> Option<String> {
    MESSAGE_FIELDS.iter().find_map(|field| match body.get(field)? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    })
}
