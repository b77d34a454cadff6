//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Error building or configuring a frontend
    #[error("Failed to build frontend: {0}")]
    BuildError(String),

    /// Frontend operation was interrupted or cancelled
    #[error("Frontend was interrupted")]
    InterruptedError,

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
