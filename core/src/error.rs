//! Common error types for attrkit.

use thiserror::Error;

/// Errors that can occur during attribute operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttrError {
    /// Attribute not found on the target object.
    #[error("Attribute not found: {attr}")]
    AttributeNotFound { attr: String },

    /// The calling convention was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target object rejected a write.
    #[error("Write rejected for attribute {attr}: {reason}")]
    WriteRejected { attr: String, reason: String },
}

impl AttrError {
    /// Shorthand for a not-found error on the given attribute name.
    pub fn not_found(attr: impl Into<String>) -> Self {
        AttrError::AttributeNotFound { attr: attr.into() }
    }
}

/// Result type for attribute operations.
pub type AttrResult<T> = Result<T, AttrError>;
