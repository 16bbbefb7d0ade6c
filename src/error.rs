// ============================================================================
// ERRORS - Client-observable failure taxonomy
// ============================================================================

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer and the service modules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the credentials attached to the request (HTTP 401).
    #[error("session expired or invalid")]
    Unauthorized,

    /// Non-2xx response other than 401.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx response whose envelope reports a failure code.
    #[error("API error {code}: {message}")]
    Api {
        code: i32,
        message: String,
        errors: Vec<String>,
    },

    /// Body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Durable storage read/write failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// The caller abandoned the request.
    #[error("request cancelled")]
    Cancelled,

    /// Client-side field check failed before anything was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text suitable for showing next to the form or table that failed
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            Self::Http { message, .. } | Self::Api { message, .. } if !message.is_empty() => {
                message.clone()
            }
            Self::Http { status, .. } => format!("The operation failed (HTTP {}).", status),
            Self::Api { code, .. } => format!("The operation failed (code {}).", code),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::Storage(_) => "Browser storage is unavailable.".to_string(),
            Self::Cancelled => "The operation was cancelled.".to_string(),
            Self::Validation(message) => message.clone(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ApiError::Network("reset".into()).is_transient());
        assert!(ApiError::Http { status: 503, message: String::new() }.is_transient());
        assert!(ApiError::Http { status: 429, message: String::new() }.is_transient());
        assert!(!ApiError::Http { status: 404, message: String::new() }.is_transient());
        assert!(!ApiError::Unauthorized.is_transient());
        assert!(!ApiError::Cancelled.is_transient());
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::Http {
            status: 400,
            message: "Invalid username or password".into(),
        };
        assert_eq!(err.user_message(), "Invalid username or password");

        let err = ApiError::Http { status: 500, message: String::new() };
        assert_eq!(err.user_message(), "The operation failed (HTTP 500).");
    }
}
