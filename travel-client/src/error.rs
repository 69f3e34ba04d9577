//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (connection refused, DNS, timeout...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status. Body is kept verbatim, or empty
    /// if it could not be read.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body or cached user record did not decode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persistent session storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status code of the response, if the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// True for `401 Unauthorized` (also what invalid login credentials produce)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_body() {
        let err = ClientError::Status {
            status: StatusCode::CONFLICT,
            body: "tour is full".into(),
        };
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 409 Conflict: tour is full");
    }

    #[test]
    fn test_unauthorized() {
        let err = ClientError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(ClientError::Config("bad".into()).status().is_none());
    }
}
