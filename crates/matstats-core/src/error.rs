//! Shared error type across matstats crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request body.
    BadRequest,
    /// Request body too large.
    PayloadTooLarge,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MatStatsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MatStatsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MatStatsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MatStatsError::BadRequest(_) => ClientCode::BadRequest,
            MatStatsError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            MatStatsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MatStatsError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to echo back to a client. Internal details stay in logs.
    pub fn public_message(&self) -> &str {
        match self {
            MatStatsError::BadRequest(msg) => msg,
            MatStatsError::PayloadTooLarge => "payload too large",
            MatStatsError::UnsupportedVersion => "unsupported config version",
            MatStatsError::Internal(_) => "internal error",
        }
    }
}
