//! Error types.

use thiserror::Error as ThisError;

/// Errors reported by the solver and its building blocks.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed distance matrix, malformed tour, or a tour whose length
    /// disagrees with the matrix.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The best-neighbor selector was handed no candidates.
    #[error("neighborhood is empty")]
    EmptyNeighborhood,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
