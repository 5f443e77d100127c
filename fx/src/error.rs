//! FX error types.

use thiserror::Error;

/// Errors that can occur while obtaining exchange rates.
#[derive(Debug, Clone, Error)]
pub enum FxError {
    /// The request could not be sent or the connection failed.
    #[error("Transport error from {url}: {message}")]
    Transport { url: String, message: String },

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The fetch did not finish in time.
    #[error("Rate fetch timed out after {0}ms")]
    Timeout(u64),

    /// The response body did not have the expected shape.
    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),

    /// Every configured source failed, or none was configured.
    #[error("No rate sources available")]
    NoSourcesAvailable,

    /// The HTTP client could not be built.
    #[error("Rate source setup failed: {0}")]
    Setup(String),
}

impl FxError {
    /// Check if the failure happened at the transport level.
    ///
    /// Nothing retries automatically; this only informs what is displayed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FxError::Transport { .. }
                | FxError::Timeout(_)
                | FxError::HttpStatus {
                    status: 500..=599,
                    ..
                }
        )
    }

    /// Get error code for display and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::Transport { .. } => "TRANSPORT_ERROR",
            FxError::HttpStatus { .. } => "HTTP_STATUS",
            FxError::Timeout(_) => "TIMEOUT",
            FxError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            FxError::NoSourcesAvailable => "NO_SOURCES_AVAILABLE",
            FxError::Setup(_) => "SETUP_ERROR",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(FxError::Timeout(8000).is_retryable());
        assert!(FxError::HttpStatus { url: "u".into(), status: 503 }.is_retryable());
        assert!(!FxError::HttpStatus { url: "u".into(), status: 404 }.is_retryable());
        assert!(!FxError::MalformedResponse("missing usd".into()).is_retryable());
    }
}
