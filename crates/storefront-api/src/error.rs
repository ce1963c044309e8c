//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to send the request (connection, DNS, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx HTTP response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Envelope carried `status == "error"` (possibly on HTTP 200).
    #[error("{0}")]
    Application(String),

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error while building a request.
    #[error("JSON error: {0}")]
    Json(String),
}

impl ApiError {
    /// The message a notification/toast should show for this error.
    ///
    /// Backend-provided messages are preferred when available.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(msg) => msg.clone(),
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this is an authentication failure (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Application("Invalid discount code".to_string());
        assert_eq!(err.user_message(), "Invalid discount code");

        let err = ApiError::Http {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert_eq!(err.user_message(), "Internal error");
    }

    #[test]
    fn test_is_unauthorized() {
        let err = ApiError::Http {
            status: 401,
            message: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Transport("x".to_string()).is_unauthorized());
    }
}
