//! Error types for the condition engine

use thiserror::Error;

/// Main error type for the condition engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// A required operand was absent or an enumeration value was out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A structural invariant was violated, such as inverting a leaf that
    /// does not support inversion
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// An operator code passed validation but has no evaluation table entry
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
}

/// Result type alias for the condition engine
pub type Result<T> = std::result::Result<T, ConditionError>;
