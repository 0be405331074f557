//! Result and error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type
///
/// Duplicate usernames and wrong credentials are not errors: the auth
/// operations report them as `Ok(false)`. Deleting an index outside the
/// ledger is not an error either.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Summing stored amounts left the representable range.
    #[error("Amount overflow: {0}")]
    Overflow(String),

    #[error("Not logged in")]
    NotLoggedIn,

    /// A store file exists but cannot be parsed.
    #[error("Corrupt store at {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a corrupt store error for `path`
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CorruptStore {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is something the user typed, as opposed to a storage failure
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::Validation(_) | Self::NotLoggedIn
        )
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
