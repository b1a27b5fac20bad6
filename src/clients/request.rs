//! HTTP request types for the Fairsenden API SDK.

use std::fmt;

use serde_json::Value;

/// HTTP methods supported by the Fairsenden API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// The body of an outgoing API request.
///
/// Most endpoints take a JSON object; the status-update endpoint takes a bare
/// string (e.g., `CUSTOMER_CONFIRMED`). Both are sent with a JSON content type,
/// matching the remote API's expectations.
///
/// # Example
///
/// ```rust
/// use fairsenden::clients::RequestBody;
/// use serde_json::json;
///
/// let json_body = RequestBody::from(json!({"zip": "10115"}));
/// let raw_body = RequestBody::from("CUSTOMER_CONFIRMED");
/// let empty = RequestBody::None;
///
/// assert!(matches!(json_body, RequestBody::Json(_)));
/// assert!(matches!(raw_body, RequestBody::Raw(_)));
/// assert!(empty.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// No request body.
    None,
    /// A JSON body.
    Json(Value),
    /// A raw string body, sent as-is.
    Raw(String),
}

impl RequestBody {
    /// Returns `true` if no body is set.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Renders the body to the string that goes on the wire.
    #[must_use]
    pub fn to_payload(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Json(value) => Some(value.to_string()),
            Self::Raw(raw) => Some(raw.clone()),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for RequestBody {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for RequestBody {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}
