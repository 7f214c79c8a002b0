//! Error types for divergence computations.

use thiserror::Error;

/// Main error type for divergence operations.
#[derive(Error, Debug, Clone)]
pub enum DivergenceError {
    /// Distribution dimensions don't match
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Negative, NaN, or infinite entry in an input matrix
    #[error("Invalid input: entry {value} at row {row}, index {index} (entries must be finite and non-negative)")]
    InvalidInput {
        row: usize,
        index: usize,
        value: f64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for divergence operations.
pub type Result<T> = std::result::Result<T, DivergenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DivergenceError::DimensionMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 2, got 3");

        let err = DivergenceError::InvalidInput {
            row: 1,
            index: 0,
            value: -0.5,
        };
        assert!(err.to_string().contains("row 1"));
        assert!(err.to_string().contains("-0.5"));
    }
}
