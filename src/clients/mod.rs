//! HTTP client types for Fairsenden API communication.
//!
//! This module provides the transport layer for making authenticated requests
//! to the Fairsenden API. It composes the bearer token, the base URL, and a
//! single JSON request/response cycle, translating transport and status-code
//! failures into typed errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The async HTTP client for API communication
//! - [`ApiResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`RequestBody`]: JSON or raw-string request bodies
//! - [`ApiError`]: Transport-level error taxonomy
//!
//! # Error Mapping
//!
//! - No token obtainable → [`ApiError::TokenMissing`], before any network call
//! - Transport failure (DNS, timeout, reset) → [`ApiError::Connection`]
//! - Remote 404 → [`ApiError::NotFound`]
//! - Other non-2xx → returned as [`ApiResponse`]; callers needing strict
//!   success use [`ApiResponse::ensure_success`], which raises
//!   [`ApiError::Unsuccessful`] with the response's reason phrase
//!
//! # Example
//!
//! ```rust,ignore
//! use fairsenden::{ApiClient, Config, ClientId, ClientSecret};
//! use fairsenden::clients::{HttpMethod, RequestBody};
//!
//! let client = ApiClient::new(&config);
//! let response = client
//!     .request(HttpMethod::Get, "serviceareas/10115", RequestBody::None)
//!     .await?
//!     .ensure_success()?;
//! println!("{}", response.body);
//! ```

mod errors;
mod http_client;
mod http_response;
mod request;

pub use errors::ApiError;
pub use http_client::{ApiClient, REQUEST_TIMEOUT_SECS, SDK_VERSION};
pub use http_response::ApiResponse;
pub use request::{HttpMethod, RequestBody};
