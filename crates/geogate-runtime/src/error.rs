//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Property path did not resolve to a value
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// Path traversal hit a value of the wrong shape
    #[error("Type error: {0}")]
    TypeError(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
