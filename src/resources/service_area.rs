//! Service-area coverage checks.
//!
//! Coverage lookups are advisory: they decide whether a save should proceed,
//! so every failure mode (missing token, connection trouble, unknown zip,
//! malformed answer) conservatively reads as "not covered" instead of
//! surfacing an error.

use crate::clients::{ApiClient, HttpMethod, RequestBody};
use crate::resources::address::Address;
use crate::resources::model::Resource;

/// Zip- and address-level coverage queries against the carrier's service
/// areas.
#[derive(Debug, Clone, Copy)]
pub struct ServiceArea;

impl ServiceArea {
    /// Returns whether the carrier actively serves the given zip code.
    pub async fn covers_zip(client: &ApiClient, zip: &str) -> bool {
        Self::query_active(client, zip, RequestBody::None).await
    }

    /// Returns whether the carrier actively serves the given address.
    ///
    /// The full address is sent along so the server can apply street-level
    /// exclusions within an otherwise covered zip.
    pub async fn covers_address(client: &ApiClient, address: &Address) -> bool {
        let Some(zip) = address.zip.as_deref() else {
            return false;
        };
        Self::query_active(client, zip, address.values().into()).await
    }

    async fn query_active(client: &ApiClient, zip: &str, body: RequestBody) -> bool {
        let path = format!("serviceareas/{zip}");
        match client.request(HttpMethod::Get, &path, body).await {
            Ok(response) => response
                .json()
                .get("active")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
            Err(error) => {
                tracing::debug!(zip, %error, "coverage lookup failed");
                false
            }
        }
    }
}
