//! Authentication for the Fairsenden API.
//!
//! Fairsenden uses the OAuth 2.0 Client Credentials Grant: the SDK exchanges
//! its client id and secret for a short-lived bearer token at the environment's
//! token endpoint. [`TokenCache`] performs the exchange and caches the token
//! for the server-declared lifetime so that every API call does not pay for a
//! fresh exchange.

mod token_cache;

pub use token_cache::TokenCache;
