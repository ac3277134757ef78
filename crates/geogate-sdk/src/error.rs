//! SDK error types

use crate::resolver::ResolveError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The location resolver collaborator failed
    #[error("Resolver error: {0}")]
    Resolve(#[from] ResolveError),

    /// A property query was requested without a `property` attribute
    #[error("Missing 'property' attribute for property query")]
    MissingProperty,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
