//! Error types for gift fetching

use thiserror::Error;

/// Failure of a single gift fetch attempt.
///
/// All variants render the same "not found" view; the distinction only
/// reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GiftError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// The body was not a gift JSON object
    #[error("Decode error: {0}")]
    Decode(String),
}

impl GiftError {
    /// The request never produced a response.
    pub fn unreachable(err: impl std::fmt::Display) -> Self {
        GiftError::Network(err.to_string())
    }

    /// A response arrived but its body could not be read.
    pub fn unreadable_body(err: impl std::fmt::Display) -> Self {
        GiftError::Decode(format!("unreadable body: {}", err))
    }
}

impl From<serde_json::Error> for GiftError {
    fn from(err: serde_json::Error) -> Self {
        GiftError::Decode(err.to_string())
    }
}

/// Result type alias for gift operations
pub type Result<T> = std::result::Result<T, GiftError>;
