//! Error types for the bandit-sim core library

use thiserror::Error;

/// Core error type for bandit environment operations
#[derive(Error, Debug)]
pub enum BanditError {
    /// Environment-related errors
    #[error("Environment error: {0}")]
    Environment(String),

    /// Unknown arm name or out-of-range arm index
    #[error("Invalid arm: {0}")]
    InvalidArm(String),

    /// Context length does not match the feature schema
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality required by the schema
        expected: usize,
        /// Dimensionality actually supplied
        actual: usize,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bandit environment operations
pub type Result<T> = std::result::Result<T, BanditError>;
