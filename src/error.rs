//! Error types for storyform

use thiserror::Error;

/// Errors that can occur while composing or submitting a story
#[derive(Debug, Error)]
pub enum Error {
    /// A required draft field was empty at submit time
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid argument supplied by the caller
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Client-side storage failure
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or malformed
    #[error("config error: {0}")]
    Config(String),

    /// Authentication problem
    #[error("auth error: {0}")]
    Auth(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
