//! Error types for the calendar service.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the calendar service.
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication error (missing token or bad credentials)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization error (token present but rejected)
    #[error("Authorization error: {0}")]
    Unauthorized(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Auth(_) => 401,
            Error::Unauthorized(_) => 403,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Message safe to send to clients. Storage and internal failures
    /// collapse to a generic message; the detail belongs in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Error::Database(_) => "Database error".to_string(),
            Error::Config(_) | Error::Serialization(_) | Error::Internal(_) => {
                "Something went wrong!".to_string()
            }
            Error::Validation(msg)
            | Error::Auth(msg)
            | Error::Unauthorized(msg)
            | Error::NotFound(msg) => msg.clone(),
        }
    }
}
