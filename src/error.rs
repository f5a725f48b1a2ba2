//! Error types for the TTL store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for store operations.
///
/// Both variants are produced by input validation, which runs strictly
/// before any mutation, so a failed call never leaves a partial write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key is neither a JSON string nor a JSON number
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// TTL is not a number, not strictly positive, or above the safe bound
    #[error("invalid ttl: {0}")]
    InvalidTtl(String),
}

// == Result Type Alias ==
/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidKey("key must be a string or a number".to_string());
        assert_eq!(
            err.to_string(),
            "invalid key: key must be a string or a number"
        );

        let err = StoreError::InvalidTtl("ttl must be a number".to_string());
        assert_eq!(err.to_string(), "invalid ttl: ttl must be a number");
    }
}
