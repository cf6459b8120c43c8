//! Call failure taxonomy
//!
//! Every way a single endpoint call can go wrong is a variant here. Failures
//! are ordinary values handed back to the caller; nothing in the call path
//! panics or aborts sibling calls.

use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CallError {
    /// Arguments rejected before any request was built
    #[error("{0}")]
    Validation(String),

    /// DNS, connect, TLS or body-read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// 2xx response whose body is not JSON
    #[error("invalid JSON in response body: {0}")]
    Decode(String),

    #[error("timeout")]
    Timeout,

    #[error("cancelled")]
    Cancelled,
}

impl CallError {
    pub fn missing_parameter(name: &str) -> Self {
        Self::Validation(format!("missing required parameter: {}", name))
    }

    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::Validation(format!("invalid parameter '{}': {}", name, reason))
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::Validation(format!("unknown tool: {}", name))
    }

    /// HTTP status code, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Http { .. } => "http",
            Self::Decode(_) => "decode",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The `{ "error": ... }` object handed back to tool hosts
    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        if let Some(status) = self.status() {
            value["status"] = json!(status);
        }
        value
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Pick a human-readable message out of an error response.
///
/// Hubstaff answers with `{"error": "..."}`; other gateways in front of it
/// use `message` or the OAuth-style `error_description`.
pub(crate) fn http_error_message(status: reqwest::StatusCode, body: Option<&Value>, raw: &str) -> String {
    if let Some(body) = body {
        for key in ["error", "message", "error_description"] {
            if let Some(text) = body.get(key).and_then(Value::as_str) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    let raw = raw.trim();
    if !raw.is_empty() && body.is_none() {
        return raw.chars().take(512).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
