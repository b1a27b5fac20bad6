//! HTTP client for Fairsenden API communication.
//!
//! This module provides the [`ApiClient`] type: a single JSON request/response
//! cycle with a bearer token from the [`TokenCache`], a fixed per-request
//! timeout, and the transport error mapping described in
//! [`clients::errors`](crate::clients::errors).

use std::time::Duration;

use crate::auth::TokenCache;
use crate::clients::errors::ApiError;
use crate::clients::http_response::ApiResponse;
use crate::clients::request::{HttpMethod, RequestBody};
use crate::config::Config;

/// Fixed per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Fairsenden API.
///
/// The client handles:
/// - Full URL construction from the configured base URL
/// - Bearer token acquisition via [`TokenCache`]
/// - JSON headers and a fixed 5-second timeout
/// - Mapping of 404 and transport failures into typed errors
///
/// Non-2xx responses other than 404 are returned as [`ApiResponse`] for the
/// caller to inspect; use [`ApiResponse::ensure_success`] when strict success
/// is required.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fairsenden::{ApiClient, Config, ClientId, ClientSecret};
/// use fairsenden::clients::{HttpMethod, RequestBody};
///
/// let config = Config::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config);
/// let response = client
///     .request(HttpMethod::Get, "serviceareas/10115", RequestBody::None)
///     .await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.fairsenden.com`).
    base_url: String,
    /// The bearer token cache shared by all requests through this client.
    token_cache: TokenCache,
    /// User-Agent header value.
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new API client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Fairsenden API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            token_cache: TokenCache::new(config),
            user_agent,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the User-Agent header value for this client.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request to the Fairsenden API.
    ///
    /// The body is sent as JSON, or verbatim for [`RequestBody::Raw`]
    /// (used by the status-update endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - No bearer token is obtainable (`TokenMissing`) — checked before any
    ///   network call
    /// - A transport failure occurs (`Connection`)
    /// - The remote answers 404 (`NotFound`)
    ///
    /// Other non-2xx responses are returned as a normal [`ApiResponse`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}/{}", self.base_url, path);

        let token = self
            .token_cache
            .get_token()
            .await
            .ok_or(ApiError::TokenMissing)?;

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        builder = builder
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent);

        if let Some(payload) = body.to_payload() {
            builder = builder.body(payload);
        }

        let response = builder.send().await.map_err(|error| ApiError::Connection {
            message: error.to_string(),
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(ApiError::NotFound);
        }

        let text = response.text().await.unwrap_or_default();
        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({}))
        };

        tracing::debug!("{method} {path} -> {status}");

        Ok(ApiResponse::new(status, body))
    }
}
