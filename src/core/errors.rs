//! Custom error types for translation operations

use thiserror::Error;

/// Prefix of every response parse failure message
pub const PARSE_FAILURE_LABEL: &str = "Failed to parse translation response";

/// Coarse classification of a [`TranslationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced an HTTP response
    Network,
    /// The service answered with a non-success status
    Http,
    /// The service answered 200 with a body of the wrong shape
    Parse,
    /// Local configuration or file problem
    Config,
}

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Transport failed before a response was received
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Service returned a non-success status
    #[error("API error: {status} - {body}")]
    ApiError {
        status: u16,
        body: String,
    },

    /// Invalid response from API
    #[error("Failed to parse translation response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error outside of response parsing (config files)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Build a parse failure from any displayable cause
    pub(crate) fn parse(cause: impl std::fmt::Display) -> Self {
        TranslationError::InvalidResponseError {
            message: cause.to_string(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::NetworkError { .. } => ErrorKind::Network,
            TranslationError::ApiError { .. } => ErrorKind::Http,
            TranslationError::InvalidResponseError { .. } => ErrorKind::Parse,
            TranslationError::ConfigError { .. }
            | TranslationError::IoError(_)
            | TranslationError::JsonError(_) => ErrorKind::Config,
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::NetworkError {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_message_carries_label() {
        let err = TranslationError::parse("expected value at line 1 column 1");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with(PARSE_FAILURE_LABEL));
    }

    #[test]
    fn test_api_error_display() {
        let err = TranslationError::ApiError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }
}
