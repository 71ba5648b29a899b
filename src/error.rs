// src/error.rs

//! Unified error handling for the rule updater.

use std::fmt;

use thiserror::Error;

/// Result type alias for rule updater operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status} for {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Unexpected response from {context}: {message}")]
    Decode { context: String, message: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal interaction failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A rule deletion failed under the `abort` policy
    #[error("Deleting rule {rule} for {user} failed: {source}")]
    DeleteAborted {
        user: String,
        rule: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a response decoding error with context.
    pub fn decode(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a prompt error.
    pub fn prompt(message: impl fmt::Display) -> Self {
        Self::Prompt(message.to_string())
    }

    /// Whether this error came from talking to the remote service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::Decode { .. } | Self::Url(_)
        )
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(error: dialoguer::Error) -> Self {
        Self::prompt(error)
    }
}
