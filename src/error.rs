//! Error types for the gymlog core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GymError>;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("unsupported backup version: {found}")]
    UnsupportedBackupVersion { found: u32 },

    #[error("could not determine the {0} directory for this platform")]
    MissingBaseDir(&'static str),
}

impl GymError {
    /// Shorthand for a [`GymError::Validation`] with a formatted message.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        GymError::Validation {
            message: message.into(),
        }
    }
}
