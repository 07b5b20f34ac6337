//! Error taxonomy for REST calls and local form validation.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, whether transport, HTTP status, decoding or local
//! validation, ends up as one display string via [`ApiError::user_message`].
//! Views show that string inline and stay usable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

const TEXT_BODY_EXCERPT_CHARS: usize = 200;

/// Body of a non-success HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ErrorBody {
    /// Classify a raw response body: JSON when it parses, text otherwise.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }
}

/// Failure of a REST call or of the local checks that precede it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: ErrorBody },

    /// The response had a success status but an unexpected body.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Local validation rejected the input; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// HTTP calls are only issued from the browser bundle.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Render the error for inline display. `context` names the failed
    /// action (e.g. `"Erreur lors de la suppression"`).
    pub fn user_message(&self, context: &str) -> String {
        match self {
            Self::Network(cause) | Self::Decode(cause) => format!("{context}: {cause}"),
            Self::Validation(message) => message.clone(),
            Self::Unavailable => context.to_owned(),
            Self::Status { status, body } => match body {
                ErrorBody::Json(value) => json_error_message(value).unwrap_or_else(|| context.to_owned()),
                ErrorBody::Text(text) => {
                    let excerpt: String = text.chars().take(TEXT_BODY_EXCERPT_CHARS).collect();
                    format!("{context} ({status})\n{excerpt}")
                }
                ErrorBody::Empty => format!("{context} ({status})"),
            },
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a message from a structured error body.
///
/// `{"detail": "..."}` wins; an object of field errors becomes
/// `field: a, b | other: c`; anything else is shown as compact JSON.
fn json_error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return Some(detail.clone());
            }
            if map.is_empty() {
                return None;
            }
            let parts = map
                .iter()
                .map(|(field, messages)| format!("{field}: {}", flatten_messages(messages)))
                .collect::<Vec<_>>();
            Some(parts.join(" | "))
        }
        Value::Array(items) if items.is_empty() => None,
        Value::Array(_) => Some(flatten_messages(value)),
        other => Some(other.to_string()),
    }
}

fn flatten_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten_messages).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
