//! # Error Types
//!
//! [`FetchError`] is the failure side of every dashboard fetch. None of these errors reach the
//! user: a failed fetch leaves the affected view state untouched.

use thiserror::Error;

/// Why a best-effort dashboard request produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Decode(String),

    /// The JSON parsed but did not carry the expected field group.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),

    /// The request group was cancelled before this request settled.
    #[error("request aborted")]
    Aborted,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(503).to_string(), "unexpected status 503");
        assert_eq!(FetchError::Shape("points").to_string(), "unexpected response shape: points");
        assert_eq!(FetchError::Aborted.to_string(), "request aborted");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
