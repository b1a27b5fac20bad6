//! Cached bearer tokens via the OAuth 2.0 Client Credentials Grant.
//!
//! This module provides [`TokenCache`], which holds the short-lived bearer
//! token used to authorize every API call. The token is fetched lazily with a
//! form-encoded client-credentials exchange and cached until the expiry the
//! token endpoint declared via `expires_in`.
//!
//! # Failure Semantics
//!
//! A failed exchange (non-2xx response, network error, or a response missing
//! the token fields) yields `None` rather than an error. Callers must treat
//! `None` as "no token obtainable" — never as an empty token.
//!
//! # Concurrency
//!
//! The cache is safe to share across tasks. Concurrent callers racing on an
//! expired token may each perform their own exchange; the grant type is
//! idempotent, so the last writer simply wins.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::{ClientId, ClientSecret, Config};

/// Grant type sent in the token exchange.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Successful response body of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// A token together with the instant it stops being valid.
#[derive(Clone, Debug)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Caches the bearer token obtained from the client-credentials exchange.
///
/// # Example
///
/// ```rust,ignore
/// use fairsenden::{Config, ClientId, ClientSecret};
/// use fairsenden::auth::TokenCache;
///
/// let config = Config::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let cache = TokenCache::new(&config);
/// if let Some(token) = cache.get_token().await {
///     println!("Bearer {token}");
/// }
/// ```
#[derive(Debug)]
pub struct TokenCache {
    token_url: String,
    client_id: ClientId,
    client_secret: ClientSecret,
    http: reqwest::Client,
    cached: RwLock<Option<CachedToken>>,
}

// Verify TokenCache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenCache>();
};

impl TokenCache {
    /// Creates a new, empty token cache for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            token_url: config.token_url().to_string(),
            client_id: config.client_id().clone(),
            client_secret: config.client_secret().clone(),
            http,
            cached: RwLock::new(None),
        }
    }

    /// Returns a bearer token, exchanging credentials if the cache is cold or stale.
    ///
    /// Returns `None` when no token is obtainable. The failed exchange is
    /// logged at warn level; it is never surfaced as an error from here.
    pub async fn get_token(&self) -> Option<String> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if !entry.is_expired() {
                    return Some(entry.token.clone());
                }
            }
        }

        let entry = self.exchange().await?;
        let token = entry.token.clone();
        *self.cached.write().await = Some(entry);
        Some(token)
    }

    /// Performs the form-encoded client-credentials exchange.
    async fn exchange(&self) -> Option<CachedToken> {
        let form = [
            ("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE),
            ("client_id", self.client_id.as_ref()),
            ("client_secret", self.client_secret.as_ref()),
        ];

        let response = match self.http.post(&self.token_url).form(&form).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!("Token exchange failed to reach {}: {error}", self.token_url);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Token exchange returned status {status}");
            return None;
        }

        match response.json::<TokenResponse>().await {
            Ok(body) => Some(CachedToken {
                token: body.access_token,
                expires_at: Instant::now() + Duration::from_secs(body.expires_in),
            }),
            Err(error) => {
                tracing::warn!("Token exchange returned an unparseable body: {error}");
                None
            }
        }
    }
}
