use thiserror::Error;

/// Errors produced while validating domain inputs or constructing flow
/// networks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Returned when an input fails domain validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Returned when a node index is outside the graph
    #[error("Vertex index out of range")]
    InvalidVertex,

    /// Returned when an edge is created with capacity below zero
    #[error("Edge capacity must not be negative")]
    NegativeCapacity,
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;
