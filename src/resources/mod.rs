//! Typed resources and the schema-driven mapping engine behind them.
//!
//! Each resource is a plain serde struct paired with a `static` [`Schema`]
//! describing its wire fields, relations, output overrides, and validation
//! rules. The [`Resource`] trait provides hydration, serialization,
//! validation, and primary-key access on top of those descriptors; the
//! concrete types add their API verbs.

mod address;
mod contact;
mod delivery;
mod delivery_options;
mod history;
mod parcel;
mod service_area;
mod shipment;
mod state;
mod timeslot;

pub mod errors;
pub mod model;
pub mod schema;
pub mod tracking;

pub use address::Address;
pub use contact::{Recipient, Sender};
pub use delivery::{Coordinates, Delivery};
pub use delivery_options::DeliveryOptions;
pub use errors::{HydrationError, ResourceError, ValidationError};
pub use history::{ParcelHistory, ScanHistory, ShipmentHistory};
pub use model::Resource;
pub use parcel::Parcel;
pub use schema::{Field, FieldKind, OutputPolicy, Rule, Schema};
pub use service_area::ServiceArea;
pub use shipment::Shipment;
pub use state::State;
pub use timeslot::Timeslot;
pub use tracking::Tracked;
