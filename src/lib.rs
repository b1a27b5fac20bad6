//! # Fairsenden API Rust SDK
//!
//! A Rust SDK for the Fairsenden parcel-delivery API, providing type-safe
//! configuration, client-credentials authentication, schema-driven resource
//! mapping, and a guarded save workflow for shipments.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`]
//! - Validated newtypes for OAuth credentials
//! - A shareable bearer-token cache over the client-credentials grant
//! - An async HTTP transport with a fixed timeout and a typed error taxonomy
//! - Typed resources with schema-driven hydration, serialization, and
//!   validation via the [`Resource`] trait
//! - The shipment save pipeline (address resolution, coverage check,
//!   delivery-date check) via [`workflows::SaveShipmentWorkflow`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fairsenden::{ClientId, ClientSecret, Config, Environment};
//!
//! // Create configuration using the builder pattern
//! let config = Config::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Saving a Shipment
//!
//! ```rust,ignore
//! use fairsenden::{ApiClient, Config, Shipment};
//! use fairsenden::resources::{Address, Recipient, Resource, Sender};
//!
//! let client = ApiClient::new(&config);
//!
//! let mut shipment = Shipment::default();
//! shipment.sender = Some(sender);
//! shipment.recipient = Some(recipient);
//!
//! // Resolves the recipient address, checks coverage, then submits.
//! let saved = shipment.save(&client, true).await?;
//! println!("Created shipment {:?}", saved.shipment_id);
//! ```
//!
//! ## Tracking a Shipment
//!
//! ```rust,ignore
//! use fairsenden::{ApiClient, Shipment};
//!
//! if let Some(shipment) = Shipment::find(&client, "shipment-id").await {
//!     for entry in &shipment.history {
//!         println!("{:?}: {:?}", entry.modification_date, entry.new_state);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; resource
//!   validation stops at the first failing rule
//! - **Thread-safe**: All types are `Send + Sync`; the token cache is the
//!   only shared mutable state
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Schema-driven mapping**: Wire shapes live in declarative per-type
//!   schemas, not in hand-written conversion code

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod workflows;

// Re-export public types at crate root for convenience
pub use auth::TokenCache;
pub use config::{ClientId, ClientSecret, Config, ConfigBuilder, Environment};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{ApiClient, ApiError, ApiResponse, HttpMethod, RequestBody};

// Re-export the resource surface
pub use resources::{
    Address, DeliveryOptions, Parcel, Recipient, Resource, ResourceError, Sender, ServiceArea,
    Shipment, Timeslot, Tracked, ValidationError,
};

// Re-export the save pipeline
pub use workflows::{SaveShipmentError, SaveShipmentWorkflow, SaveStage};
