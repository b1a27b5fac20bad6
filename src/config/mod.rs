//! Configuration types for the Fairsenden API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Fairsenden.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Config`]: The main configuration struct holding all SDK settings
//! - [`ConfigBuilder`]: A builder for constructing [`Config`] instances
//! - [`ClientId`]: A validated client id newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`Environment`]: Sandbox or production, selecting the base and token URL pair
//!
//! # Example
//!
//! ```rust
//! use fairsenden::{Config, ClientId, ClientSecret, Environment};
//!
//! let config = Config::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.dev.fairsenden.com");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret};

use crate::error::ConfigError;

/// The Fairsenden environment to operate against.
///
/// Each environment pairs an API base URL with an OAuth token endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// The production API.
    #[default]
    Production,
    /// The sandbox API for development and testing.
    Sandbox,
}

impl Environment {
    /// Returns the API base URL for this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.fairsenden.com",
            Self::Sandbox => "https://api.dev.fairsenden.com",
        }
    }

    /// Returns the OAuth token endpoint for this environment.
    #[must_use]
    pub const fn token_url(&self) -> &'static str {
        match self {
            Self::Production => {
                "https://api-fairsenden.auth.eu-central-1.amazoncognito.com/oauth2/token"
            }
            Self::Sandbox => {
                "https://admin-dev-fairsenden.auth.eu-central-1.amazoncognito.com/oauth2/token"
            }
        }
    }
}

/// Configuration for the Fairsenden API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// API credentials and environment settings.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use fairsenden::{Config, ClientId, ClientSecret};
///
/// let config = Config::builder()
///     .client_id(ClientId::new("your-client-id").unwrap())
///     .client_secret(ClientSecret::new("your-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://api.fairsenden.com");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    client_id: ClientId,
    client_secret: ClientSecret,
    environment: Environment,
    base_url: String,
    token_url: String,
    user_agent_prefix: Option<String>,
}

impl Config {
    /// Creates a new builder for constructing a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the OAuth token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// Required fields are `client_id` and `client_secret`. All other fields
/// have sensible defaults.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `base_url` / `token_url`: derived from the environment
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use fairsenden::{Config, ClientId, ClientSecret, Environment};
///
/// let config = Config::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .environment(Environment::Sandbox)
///     .user_agent_prefix("MyShop/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    environment: Option<Environment>,
    base_url: Option<String>,
    token_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the API base URL.
    ///
    /// Mainly useful for pointing the SDK at a mock server in tests. When
    /// unset, the environment's base URL is used.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the OAuth token endpoint URL.
    ///
    /// Mainly useful for pointing the SDK at a mock server in tests. When
    /// unset, the environment's token URL is used.
    #[must_use]
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`Config`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set, or [`ConfigError::InvalidUrl`] if a URL
    /// override lacks a scheme.
    pub fn build(self) -> Result<Config, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let environment = self.environment.unwrap_or_default();

        for url in [self.base_url.as_deref(), self.token_url.as_deref()]
            .into_iter()
            .flatten()
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    url: url.to_string(),
                });
            }
        }

        Ok(Config {
            client_id,
            client_secret,
            environment,
            base_url: self
                .base_url
                .map_or_else(|| environment.base_url().to_string(), strip_trailing_slash),
            token_url: self
                .token_url
                .unwrap_or_else(|| environment.token_url().to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn strip_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
