//! Error types for Peergrid

use thiserror::Error;

/// Main error type for Peergrid
#[derive(Error, Debug)]
pub enum PeergridError {
    // Construction errors
    #[error("group name must not be empty")]
    EmptyGroupName,

    // Metadata errors
    #[error("malformed port metadata: {value:?}")]
    MalformedPort { value: String },

    // Registry errors
    #[error("registry error: {0}")]
    Registry(String),
}

impl PeergridError {
    /// Whether the error originated in the external registry client
    /// rather than in this crate's own validation.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Registry(_))
    }
}

/// Result type alias for Peergrid
pub type Result<T> = std::result::Result<T, PeergridError>;
