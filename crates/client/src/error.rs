//! Error types for backend requests

use thiserror::Error;

/// The error type for catalog backend requests
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not decode as the expected shape
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ClientError {
    /// Whether this error came from the transport rather than the backend
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Request(_))
    }

    /// Whether this error is a non-success backend status
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 502,
            url: "http://localhost:8080/api/entity/7".to_string(),
        };
        assert!(err.is_status());
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "catalog returned HTTP 502 for http://localhost:8080/api/entity/7"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = ClientError::Decode {
            url: "http://localhost:8080/api/entities/search".to_string(),
            message: "missing field `name`".to_string(),
        };
        assert!(err.to_string().contains("missing field `name`"));
    }
}
