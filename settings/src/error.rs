//! Settings error types.

use thiserror::Error;

/// Errors that can occur while persisting configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing durable storage failed.
    #[error("Storage error for key {key}: {source}")]
    Storage {
        key: String,
        source: std::io::Error,
    },

    /// The configuration could not be serialized.
    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SettingsError {
    /// Get error code for display and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SettingsError::Storage { .. } => "STORAGE_ERROR",
            SettingsError::Encode(_) => "ENCODE_ERROR",
        }
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
