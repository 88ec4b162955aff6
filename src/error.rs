//! Client error types
//!
//! Errors produced while talking to the pantry API, shared by the
//! native client and the browser UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    /// Sent alongside recipe-suggestion failures
    #[serde(default)]
    pub expiring_ingredients: Vec<String>,
}

/// Errors that can occur when calling the pantry API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error {status}: {}", .body.error.as_deref().unwrap_or("no error message"))]
    Api { status: u16, body: ErrorBody },

    /// A success response did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build an API error from a status and raw body text.
    /// Bodies that are not the expected JSON shape yield an empty [`ErrorBody`].
    pub fn from_response(status: u16, text: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(text).unwrap_or_default();
        ClientError::Api { status, body }
    }

    /// The server-provided error message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { body, .. } => body.error.as_deref(),
            _ => None,
        }
    }

    /// Text for a user-facing alert: the server message verbatim, or `fallback`
    pub fn alert_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type alias for pantry API calls
pub type ClientResult<T> = Result<T, ClientError>;
