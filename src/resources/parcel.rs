//! Individual parcels within a shipment.

use serde::{Deserialize, Serialize};

use crate::resources::history::{ParcelHistory, PARCEL_HISTORY_SCHEMA};
use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};
use crate::resources::state::{State, STATE_SCHEMA};

pub(crate) static PARCEL_SCHEMA: Schema = Schema {
    name: "Parcel",
    primary_key: "parcelId",
    fields: &[
        Field::int("weight"),
        Field::int("volume"),
        Field::str("parcelId"),
        Field::str("parcelCustomerReferenceId"),
        Field::has_one("deliveryState", &STATE_SCHEMA),
        Field::has_many("history", &PARCEL_HISTORY_SCHEMA),
    ],
    rules: &[],
};

/// A single parcel, keyed by its carrier-assigned `parcelId`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parcel {
    pub weight: Option<i64>,
    pub volume: Option<i64>,
    #[serde(rename = "parcelId")]
    pub parcel_id: Option<String>,
    #[serde(rename = "parcelCustomerReferenceId")]
    pub parcel_customer_reference_id: Option<String>,
    #[serde(rename = "deliveryState")]
    pub delivery_state: Option<State>,
    #[serde(default)]
    pub history: Vec<ParcelHistory>,
}

impl Resource for Parcel {
    const NAME: &'static str = "Parcel";

    fn schema() -> &'static Schema {
        &PARCEL_SCHEMA
    }
}
