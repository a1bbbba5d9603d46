//! Unified client error handling
//!
//! Every backend call and session operation resolves to a `ClientError`.
//! View-models turn these into toasts through `user_message()`.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Shown when neither the backend nor the transport produced a usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Session error: {0}")]
    Session(String),
}

/// Error body returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ClientError {
    /// Build an error from a non-success status and the (possibly absent) error body.
    pub fn from_status(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let message = body
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            _ => Self::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Machine-readable code, aligned with the backend's error codes.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Session(_) => "SESSION_ERROR",
        }
    }

    /// Message suitable for a toast. Falls back to a generic string.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::Validation(msg)
            | Self::Session(msg) => msg.as_str(),
            Self::Server { message, .. } => message.as_str(),
            // Don't surface transport internals
            Self::Network(_) | Self::Decode(_) => "",
        };

        if message.trim().is_empty() {
            match self {
                Self::Unauthorized(_) => "Your session has expired. Please sign in again.".to_string(),
                Self::Forbidden(_) => "You do not have access to this resource.".to_string(),
                Self::NotFound(_) => "The requested item could not be found.".to_string(),
                Self::Network(_) => "Unable to reach the server. Check your connection.".to_string(),
                _ => GENERIC_ERROR_MESSAGE.to_string(),
            }
        } else {
            message.to_string()
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e)
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
