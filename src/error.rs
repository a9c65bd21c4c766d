//! Error types for network construction and training

use std::fmt;

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Which vector handed to the network had the wrong length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    /// Values fed into the input layer
    Input,
    /// Expected values for the output layer
    Target,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Input => write!(f, "input"),
            VectorKind::Target => write!(f, "target"),
        }
    }
}

/// Errors surfaced by the network
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A vector length does not match the configured layer size
    #[error("{kind} vector has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Which vector was rejected
        kind: VectorKind,
        /// Configured size of the matching layer
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The topology cannot describe a network
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// A hyperparameter is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = NetworkError::ShapeMismatch {
            kind: VectorKind::Target,
            expected: 1,
            actual: 3,
        };
        assert_eq!(err.to_string(), "target vector has 3 values, expected 1");
    }

    #[test]
    fn test_invalid_topology_message() {
        let err = NetworkError::InvalidTopology("need at least 2 layers, got 1".into());
        assert_eq!(err.to_string(), "Invalid topology: need at least 2 layers, got 1");
    }
}
