//! Typed error enum for API calls.

use thiserror::Error;

/// Errors from OpenClaw API operations.
///
/// Every client call resolves with a value or fails with exactly one of
/// these; the client never retries or recovers locally.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `detail` comes from the body's `detail` field when
    /// the backend provides one, otherwise `HTTP <status>`.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    /// Network-level failure before a response was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Success status but the body is not valid JSON.
    #[error("malformed response body (HTTP {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// Response parsed as JSON but did not match the expected model.
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    /// Request model could not be serialized to JSON.
    #[error("failed to encode {context}: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    /// No-content response on an endpoint that must return a body.
    #[error("empty response from {path} where a body was expected")]
    EmptyResponse { path: String },
    /// HTTP client construction failed (TLS backend failure).
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ApiError {
    /// The HTTP status code, for [`ApiError::Status`] responses.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_uses_detail() {
        let err = ApiError::Status { status: 404, detail: "Not found".to_owned() };
        assert_eq!(err.to_string(), "HTTP 404: Not found");
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_non_status_has_no_code() {
        let err = ApiError::EmptyResponse { path: "/agents".to_owned() };
        assert_eq!(err.status_code(), None);
        assert!(!err.is_not_found());
    }
}
