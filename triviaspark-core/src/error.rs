//! Error types for triviaspark-core

use thiserror::Error;

/// Main error type for the triviaspark-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// API client error
    #[error("API error: {0}")]
    Api(String),

    /// Event date that could not be parsed or anchored to the event timezone
    #[error("invalid event date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Join code that does not match the expected shape
    #[error("invalid join code: {0}")]
    InvalidJoinCode(String),
}

/// Result type alias for triviaspark-core
pub type Result<T> = std::result::Result<T, Error>;
