//! Error types for configuration values.

use thiserror::Error;

/// Error produced when a textual value does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown language code.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unknown font size.
    #[error("Unknown font size: {0}")]
    UnknownFontSize(String),
}

impl ParseError {
    /// Get error code for display and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
            ParseError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            ParseError::UnknownFontSize(_) => "UNKNOWN_FONT_SIZE",
        }
    }
}

/// Result type alias for parsing configuration values.
pub type Result<T> = std::result::Result<T, ParseError>;
