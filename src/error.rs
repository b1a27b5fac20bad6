//! Error types for SDK configuration.
//!
//! This module contains error types used when creating and validating
//! configuration values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use fairsenden::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide a valid Fairsenden client id.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid Fairsenden client secret.")]
    EmptyClientSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A URL override is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.example.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let error = ConfigError::EmptyClientId;
        let message = error.to_string();
        assert!(message.contains("Client id cannot be empty"));
        assert!(message.contains("valid Fairsenden client id"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "client_id" };
        let message = error.to_string();
        assert!(message.contains("client_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientId;
        let _: &dyn std::error::Error = &error;
    }
}
