//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PlantView
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PlantViewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential storage error: {0}")]
    Credentials(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PlantView operations
pub type Result<T> = std::result::Result<T, PlantViewError>;

/// Classification of a failed API call.
///
/// The kind never changes the status or message reported by the backend; it
/// only tells the presenting layer how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    Transport,
    /// The session is no longer usable; the user must sign in again.
    Unauthorized,
    /// The backend broke the response contract (e.g. refresh without access).
    Protocol,
    /// Any other non-2xx response.
    Application,
    /// Local failure (credential storage, request encoding).
    Internal,
}

/// The single error type crossing the request executor boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    /// HTTP status code; `0` when no response was received.
    pub status: u16,
    pub message: String,
    pub kind: ApiErrorKind,
}

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Status reported for errors that never reached the backend.
pub const TRANSPORT_ERROR_STATUS: u16 = 0;

impl ApiError {
    /// Build an error from an HTTP status, classifying it by status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            TRANSPORT_ERROR_STATUS => ApiErrorKind::Transport,
            401 => ApiErrorKind::Unauthorized,
            _ => ApiErrorKind::Application,
        };
        Self { status, message: message.into(), kind }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: TRANSPORT_ERROR_STATUS,
            message: message.into(),
            kind: ApiErrorKind::Transport,
        }
    }

    /// Session-ending failure, keeping the status reported by the backend.
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), kind: ApiErrorKind::Unauthorized }
    }

    pub fn protocol(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), kind: ApiErrorKind::Protocol }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: 500, message: message.into(), kind: ApiErrorKind::Internal }
    }

    /// Whether the caller has to authenticate again before retrying.
    pub fn requires_reauthentication(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ApiErrorKind::Transport
    }
}

impl From<PlantViewError> for ApiError {
    fn from(err: PlantViewError) -> Self {
        match err {
            PlantViewError::Network(message) => Self::transport(message),
            other => Self::internal(other.to_string()),
        }
    }
}
