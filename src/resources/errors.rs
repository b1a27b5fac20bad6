//! Resource-specific error types.
//!
//! This module contains the error types raised by the hydration engine and by
//! resource operations: impossible scalar coercions, declarative-rule
//! violations, and missing-identifier preconditions.
//!
//! # Error Handling
//!
//! - [`HydrationError`]: raw JSON could not be mapped into a typed resource
//! - [`ValidationError`]: the first failing declarative rule (fail-fast)
//! - [`ResourceError`]: unified error for resource operations, wrapping the
//!   above plus the transport-level [`ApiError`](crate::clients::ApiError)

use thiserror::Error;

use crate::clients::ApiError;

/// Error raised when raw JSON cannot be hydrated into a typed resource.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HydrationError {
    /// A raw value could not be coerced to the field's declared type.
    #[error("Cannot coerce field '{field}' of {resource} to {expected}")]
    Coercion {
        /// The resource type being hydrated.
        resource: &'static str,
        /// The offending field.
        field: &'static str,
        /// The declared semantic type.
        expected: &'static str,
    },

    /// The coerced value tree did not match the resource's shape.
    #[error("{resource} could not be built from the response: {message}")]
    Shape {
        /// The resource type being hydrated.
        resource: &'static str,
        /// The underlying deserialization message.
        message: String,
    },
}

/// Error raised when a declarative validation rule fails.
///
/// Carries the first failing rule's message; validation is fail-fast across
/// the whole resource graph, never an aggregate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The failing rule's message.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message used when a required field is absent or empty.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::new(format!("The {field} field is required."))
    }

    /// The message used when a field's length is out of bounds.
    #[must_use]
    pub fn length(field: &str, min: usize, max: usize) -> Self {
        Self::new(format!(
            "The {field} field must be between {min} and {max} characters."
        ))
    }
}

/// Unified error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A declarative validation rule failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A response could not be hydrated.
    #[error(transparent)]
    Hydration(#[from] HydrationError),

    /// An update/delete/status operation was attempted without a primary key.
    #[error("{resource} has no primary key")]
    PrimaryKeyMissing {
        /// The resource type missing its identifier.
        resource: &'static str,
    },

    /// A nested-resource operation was attempted without the nested identifier.
    #[error("No {key} available for {resource}")]
    ForeignKeyMissing {
        /// The resource type the operation was invoked on.
        resource: &'static str,
        /// The missing identifier.
        key: &'static str,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Api(#[from] ApiError),
}
