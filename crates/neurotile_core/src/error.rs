//! Error types for neurotile_core.
//!
//! Construction-time failures are returned as values. Broken internal
//! invariants (propagating from an output layer, indexing outside the grid)
//! panic instead; they indicate a caller bug.

use thiserror::Error;

/// Errors raised while building or inheriting a network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Layer count or layer sizes are unusable.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Inheritance was requested without a parent network.
    #[error("Network cannot inherit from a missing parent")]
    MissingParent,

    /// Mutation magnitude is negative or not finite.
    #[error("Invalid variance: {0}")]
    InvalidVariance(f64),

    /// A layer was fed the wrong number of values.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },
}

/// Main error type for simulation construction.
#[derive(Error, Debug)]
pub enum SimError {
    /// Network construction failed.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Grid dimensions or elevation data are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration rejected by validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for neurotile_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new grid error.
    #[must_use]
    pub fn grid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Creates a new config error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
