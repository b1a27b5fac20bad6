//! HTTP response types for the Fairsenden API SDK.

use serde_json::Value;

use crate::clients::errors::ApiError;

/// An HTTP response from the Fairsenden API.
///
/// Carries the status code and the parsed JSON body. Responses with empty or
/// non-JSON bodies carry an empty object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The parsed response body.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the parsed JSON body.
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.body
    }

    /// Returns the canonical reason phrase for the status code.
    #[must_use]
    pub fn reason(&self) -> String {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .map_or_else(|| format!("Status {}", self.status), ToString::to_string)
    }

    /// Demands strict success, turning any non-2xx response into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsuccessful`] carrying the response's reason
    /// phrase when the status is not 2xx.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Unsuccessful {
                status: self.status,
                reason: self.reason(),
            })
        }
    }
}
