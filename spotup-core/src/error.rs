//! Error types for the spotup state model.

use thiserror::Error;

/// Errors that can occur in spotup operations.
///
/// All of these are recoverable: a failed mutation leaves the stores
/// observably unchanged, and the front end is expected to surface the
/// message and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotUpError {
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event is full: {0}")]
    CapacityExceeded(String),

    #[error("Already joined event: {0}")]
    AlreadyJoined(String),

    #[error("No event selected")]
    NothingSelected,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for spotup operations.
pub type SpotUpResult<T> = Result<T, SpotUpError>;
