//! Error types for the Star Wars API client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! End of a query sequence is not an error: [`QuerySet::next`] reports it
//! as `Ok(None)`. [`Error::PageNotFound`] is the fetcher's signal for it and
//! is swallowed by the sequence.
//!
//! [`QuerySet::next`]: crate::query::QuerySet::next

use crate::resource::ResourceKind;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Fetch Signals
    // ============================================================================
    #[error("No page {page} for {kind}")]
    PageNotFound { kind: ResourceKind, page: u32 },

    #[error("{kind} with id {id} not found")]
    NotFound { kind: ResourceKind, id: u32 },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a page-not-found signal
    pub fn page_not_found(kind: ResourceKind, page: u32) -> Self {
        Self::PageNotFound { kind, page }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Is this the "past the last page" signal?
    pub fn is_page_not_found(&self) -> bool {
        matches!(self, Self::PageNotFound { .. })
    }

    /// Did the request fail on the wire (as opposed to decoding)?
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::HttpStatus { .. }
                | Self::RateLimited { .. }
                | Self::Timeout { .. }
                | Self::MaxRetriesExceeded { .. }
                | Self::InvalidUrl(_)
        )
    }

    /// Did the response arrive but fail to decode?
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::JsonParse(_))
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::page_not_found(ResourceKind::Film, 3);
        assert_eq!(err.to_string(), "No page 3 for films");

        let err = Error::NotFound {
            kind: ResourceKind::Person,
            id: 99,
        };
        assert_eq!(err.to_string(), "people with id 99 not found");

        let err = Error::http_status(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::page_not_found(ResourceKind::Person, 1).is_page_not_found());
        assert!(!Error::page_not_found(ResourceKind::Person, 1).is_transport());

        assert!(Error::http_status(503, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 10 }.is_transport());
        assert!(!Error::decode("bad").is_transport());

        assert!(Error::decode("bad").is_decode());
        assert!(!Error::config("bad").is_decode());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(502, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::page_not_found(ResourceKind::Film, 2).is_retryable());
        assert!(!Error::decode("bad").is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
