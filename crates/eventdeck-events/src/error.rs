//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while building or querying a catalog.
///
/// Filtering itself is total and never produces one of these.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventError {
    /// Two records share an identifier.
    #[error("duplicate event id: {0}")]
    DuplicateId(String),
}

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;
