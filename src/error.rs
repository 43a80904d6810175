//! Error types for the Spark client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport) or a
/// response body. Kept opaque so any HTTP stack can sit underneath.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the Spark client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("no {field} specified")]
    MissingField { field: &'static str },

    #[error("{message}")]
    Validation { message: String },

    #[error("no room with name {name:?} was found")]
    RoomNotFound { name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] BoxError),

    #[error("HTTP Status {status}: {body:?}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    // ============================================================================
    // Compound Errors
    // ============================================================================
    #[error("{}", join_messages(.0))]
    Multiple(Vec<Error>),
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Wrap a transport failure
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Wrap a body read failure
    pub fn body_read(source: impl Into<BoxError>) -> Self {
        Self::BodyRead(source.into())
    }

    /// Combine two errors, keeping both causes visible.
    ///
    /// Nested `Multiple` values are flattened so the cause list stays one level deep.
    pub fn combine(first: Error, second: Error) -> Self {
        let mut causes = first.into_causes();
        causes.extend(second.into_causes());
        Self::Multiple(causes)
    }

    /// The individual causes of this error (itself, unless it is `Multiple`)
    pub fn causes(&self) -> Vec<&Error> {
        match self {
            Error::Multiple(errors) => errors.iter().flat_map(Error::causes).collect(),
            other => vec![other],
        }
    }

    fn into_causes(self) -> Vec<Error> {
        match self {
            Error::Multiple(errors) => errors.into_iter().flat_map(Error::into_causes).collect(),
            other => vec![other],
        }
    }

    /// HTTP status code carried by a protocol error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for errors raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::Validation { .. }
        )
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for the Spark client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_field("room ID");
        assert_eq!(err.to_string(), "no room ID specified");

        let err = Error::http_status(500, "boom");
        assert_eq!(err.to_string(), "HTTP Status 500: \"boom\"");

        let err = Error::RoomNotFound {
            name: "lobby".to_string(),
        };
        assert_eq!(err.to_string(), "no room with name \"lobby\" was found");
    }

    #[test]
    fn test_http_status_carries_code_and_body() {
        let err = Error::http_status(500, "boom");
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
        assert_eq!(err.status(), Some(500));
        assert_eq!(Error::config("x").status(), None);
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let err = Error::transport("connection refused");
        assert_eq!(err.to_string(), "HTTP request failed: connection refused");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_combine_keeps_both_causes() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::combine(Error::http_status(502, "bad gateway"), Error::Decode(decode));

        let causes = err.causes();
        assert_eq!(causes.len(), 2);
        assert_eq!(causes[0].status(), Some(502));
        assert!(matches!(causes[1], Error::Decode(_)));

        let message = err.to_string();
        assert!(message.contains("HTTP Status 502"));
        assert!(message.contains("Failed to decode response"));
    }

    #[test]
    fn test_combine_flattens_nested() {
        let inner = Error::combine(Error::config("a"), Error::config("b"));
        let err = Error::combine(inner, Error::config("c"));
        assert_eq!(err.causes().len(), 3);
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_field("person ID").is_validation());
        assert!(Error::validation("bad").is_validation());
        assert!(!Error::http_status(400, "").is_validation());
    }
}
