//! Error types for the qkb application.
//!
//! A small hierarchical taxonomy built on `thiserror`, composing via `From`
//! and the `?` operator.
//!
//! # Hierarchy
//!
//! - [`AppError`] - top-level error returned from main application logic
//!   - [`ApiError`] - backend request failures (transport, status, decode)
//!   - [`crate::config::ConfigError`] - config file read/parse failures
//!   - [`crate::logging::LoggingError`] - tracing setup failures
//!   - `std::io::Error` - terminal/TUI failures
//!
//! # Recovery strategy
//!
//! API errors are **non-fatal**: they are logged, surfaced on the status
//! line, and the previously loaded dataset is retained. Config, logging and
//! terminal errors are fatal and propagate out of `main`. There are no
//! automatic retries anywhere; a failed request requires explicit user
//! re-action (reopen the form, revisit the page).

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A backend request failed. Non-fatal inside the event loop; fatal only
    /// if it happens before the UI is up.
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error. Fatal; the terminal is restored and
    /// the message written to stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors from backend API requests.
///
/// The three variants mirror how a request can fail: the transport itself
/// (including the configured timeout), a non-success HTTP status, or a body
/// that does not match the expected shape.
///
/// On any of these the UI keeps the prior dataset, logs the error, and shows
/// a status-line message. The "no results" rendering is only used when the
/// loaded item list is actually empty; a failed fetch never blanks the view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS failure, or the
    /// request timeout elapsed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// The response status code.
        status: u16,
        /// Short context, typically the request path.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an `Http` error from a status code and request context.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    /// One-line summary suitable for the status line.
    pub fn status_line(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => "Request timed out".to_string(),
            ApiError::Network(_) => "Network error - backend unreachable".to_string(),
            ApiError::Http { status, .. } => format!("Request failed (HTTP {status})"),
            ApiError::Decode(_) => "Unexpected response from backend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_context() {
        let err = ApiError::http(503, "GET /qna");
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("GET /qna"));
    }

    #[test]
    fn http_status_line_is_terse() {
        let err = ApiError::http(401, "GET /auth/me");
        assert_eq!(err.status_line(), "Request failed (HTTP 401)");
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: ApiError = serde_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status_line(), "Unexpected response from backend");
    }

    #[test]
    fn app_error_from_api_error() {
        let err: AppError = ApiError::http(500, "POST /qna").into();
        let msg = err.to_string();
        assert!(msg.contains("API request failed"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AppError = io_err.into();
        assert!(err.to_string().contains("Terminal error"));
    }
}
