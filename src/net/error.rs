//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a page can see is one of these variants. Pages store
//! `user_message()` in their own state; nothing propagates past the
//! component that issued the call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use records::FieldErrors;
use serde_json::Value;

use super::transport::TransportError;

/// Shown for network and timeout failures. Nothing retries automatically.
pub const NETWORK_RETRY_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Rejection text when the server body carried no message.
pub const REJECTED_FALLBACK: &str = "The request was rejected";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Field-level input errors, from local validation or a 400 body.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// 401 that the refresh protocol could not recover.
    #[error("authentication required")]
    Unauthorized,

    /// 400/403/409-style business rejection carrying the server's message.
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("network failure: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("request encode failed: {0}")]
    Encode(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => Self::Network(msg),
            TransportError::Timeout(ms) => Self::Timeout(ms),
        }
    }
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let message = server_message(&json);
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound { message: message.unwrap_or_else(|| "Not found".to_owned()) },
            400 if message.is_none() => match FieldErrors::from_server_body(&json) {
                Some(fields) => Self::Validation(fields),
                None => Self::Rejected { status, message: REJECTED_FALLBACK.to_owned() },
            },
            400..=499 => Self::Rejected {
                status,
                message: message.unwrap_or_else(|| REJECTED_FALLBACK.to_owned()),
            },
            _ => Self::Server {
                status,
                message: message.unwrap_or_else(|| "Something went wrong on the server".to_owned()),
            },
        }
    }

    /// Text to surface in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(fields) => fields.summary().unwrap_or("Please correct the highlighted fields").to_owned(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_owned(),
            Self::Rejected { message, .. } | Self::NotFound { message } | Self::Server { message, .. } => {
                message.clone()
            }
            Self::Network(_) | Self::Timeout(_) => NETWORK_RETRY_MESSAGE.to_owned(),
            Self::Decode(_) | Self::Encode(_) => "Unexpected response from the server".to_owned(),
        }
    }

    /// Field errors to render inline, if this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

/// The server's human message: `error`, then `message`, then `detail`, then
/// the first `non_field_errors` entry.
fn server_message(body: &Value) -> Option<String> {
    ["error", "message", "detail"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_owned)
        .or_else(|| {
            body.get("non_field_errors")
                .and_then(Value::as_array)
                .and_then(|items| items.first())
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
}
