//! Error types for the toast crate.

use thiserror::Error;

/// Errors that can occur while setting up a toast controller.
#[derive(Debug, Error)]
pub enum ToastError {
    /// No tokio runtime to run the dismiss timer on.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(String),
}

/// Result type for toast operations.
pub type Result<T> = std::result::Result<T, ToastError>;
