//! Transport-level error types for the Fairsenden API SDK.
//!
//! This module contains the error taxonomy for HTTP operations: token
//! acquisition failures, connection failures, remote 404s, and strict-success
//! violations.
//!
//! # Error Handling
//!
//! [`ApiClient::request`](crate::clients::ApiClient::request) raises
//! [`ApiError::TokenMissing`], [`ApiError::Connection`], and
//! [`ApiError::NotFound`] itself. Other non-2xx responses pass through as an
//! [`ApiResponse`](crate::clients::ApiResponse) and only become
//! [`ApiError::Unsuccessful`] when the caller demands strict success via
//! [`ApiResponse::ensure_success`](crate::clients::ApiResponse::ensure_success).
//!
//! # Example
//!
//! ```rust,ignore
//! use fairsenden::clients::{ApiClient, ApiError, HttpMethod, RequestBody};
//!
//! match client.request(HttpMethod::Get, "shipments/abc", RequestBody::None).await {
//!     Ok(response) => println!("Status: {}", response.status),
//!     Err(ApiError::TokenMissing) => println!("Could not get a token"),
//!     Err(ApiError::NotFound) => println!("Resource not found"),
//!     Err(ApiError::Connection { message }) => println!("Connection failed: {message}"),
//!     Err(ApiError::Unsuccessful { status, reason }) => println!("{status}: {reason}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for transport-level failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No bearer token could be obtained from the token endpoint.
    ///
    /// Raised before any business call is issued.
    #[error("Could not get a token")]
    TokenMissing,

    /// A transport-level failure (DNS, timeout, connection reset).
    #[error("Connection failure: {message}")]
    Connection {
        /// The message of the underlying transport error.
        message: String,
    },

    /// The remote API answered 404 for the requested resource.
    #[error("Resource not found")]
    NotFound,

    /// A non-2xx response where the caller required strict success.
    #[error("Request unsuccessful: {reason}")]
    Unsuccessful {
        /// The HTTP status code of the response.
        status: u16,
        /// The response's reason phrase.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_missing_message() {
        assert_eq!(ApiError::TokenMissing.to_string(), "Could not get a token");
    }

    #[test]
    fn test_connection_error_carries_original_message() {
        let error = ApiError::Connection {
            message: "dns error".to_string(),
        };
        assert!(error.to_string().contains("dns error"));
    }

    #[test]
    fn test_unsuccessful_carries_reason_phrase() {
        let error = ApiError::Unsuccessful {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
        };
        assert!(error.to_string().contains("Unprocessable Entity"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ApiError::NotFound;
    }
}
