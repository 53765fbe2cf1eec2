/*
[INPUT]:  Error sources (HTTP, WebSocket, serialization, configuration)
[OUTPUT]: Structured error types with status codes and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Main error type for the Independent Reserve adapter
#[derive(Error, Debug)]
pub enum IrError {
    /// Connection, DNS, TLS or timeout failure on a REST call
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// WebSocket transport failure
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// Malformed or unexpected frame / body
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Missing or invalid credentials, URLs or settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl IrError {
    /// Create a status error from a response status and body
    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        IrError::HttpStatus {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status code, if the remote answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IrError::HttpStatus { status, .. } => Some(*status),
            IrError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            IrError::Transport(_) | IrError::WebSocket(_) => true,
            IrError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if error stems from local configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, IrError::Configuration(_) | IrError::UrlParse(_))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, IrError>;
