//! Error types for the orchestration client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the orchestration service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(ClientError::api_error(404, "missing").is_not_found());
        assert!(!ClientError::api_error(409, "conflict").is_not_found());
        assert!(!ClientError::api_error(503, "down").is_not_found());
        assert!(!ClientError::ParseError("bad".into()).is_not_found());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(422, "invalid work pool");
        assert_eq!(err.to_string(), "API error (status 422): invalid work pool");
    }
}
