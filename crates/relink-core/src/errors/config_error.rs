//! Configuration errors.

use super::error_code::{self, RelinkErrorCode};

/// Errors while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl RelinkErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse { .. } => error_code::CONFIG_PARSE,
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID,
        }
    }
}
