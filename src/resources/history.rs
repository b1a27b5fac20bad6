//! State-change and scan histories.
//!
//! Shipments and parcels both carry chronological histories, but the wire
//! shapes differ slightly between them (note the differing casing of the
//! new-state key). Scan histories record depot scan events instead of state
//! transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};
use crate::resources::state::{State, STATE_SCHEMA};

pub(crate) static SHIPMENT_HISTORY_SCHEMA: Schema = Schema {
    name: "ShipmentHistory",
    primary_key: "id",
    fields: &[
        Field::date_time("modificationDate"),
        Field::has_one("new_state", &STATE_SCHEMA),
    ],
    rules: &[],
};

pub(crate) static PARCEL_HISTORY_SCHEMA: Schema = Schema {
    name: "ParcelHistory",
    primary_key: "id",
    fields: &[
        Field::has_one("newState", &STATE_SCHEMA),
        Field::date_time("modificationDate"),
    ],
    rules: &[],
};

pub(crate) static SCAN_HISTORY_SCHEMA: Schema = Schema {
    name: "ScanHistory",
    primary_key: "id",
    fields: &[
        Field::str("scanDescription"),
        Field::date_time("modificationDate"),
        Field::str("fairsendenId"),
        Field::str("depotId"),
    ],
    rules: &[],
};

/// A state transition in a shipment's history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShipmentHistory {
    #[serde(rename = "modificationDate")]
    pub modification_date: Option<DateTime<Utc>>,
    pub new_state: Option<State>,
}

impl Resource for ShipmentHistory {
    const NAME: &'static str = "ShipmentHistory";

    fn schema() -> &'static Schema {
        &SHIPMENT_HISTORY_SCHEMA
    }
}

/// A state transition in a parcel's history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParcelHistory {
    #[serde(rename = "newState")]
    pub new_state: Option<State>,
    #[serde(rename = "modificationDate")]
    pub modification_date: Option<DateTime<Utc>>,
}

impl Resource for ParcelHistory {
    const NAME: &'static str = "ParcelHistory";

    fn schema() -> &'static Schema {
        &PARCEL_HISTORY_SCHEMA
    }
}

/// A depot scan event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanHistory {
    #[serde(rename = "scanDescription")]
    pub scan_description: Option<String>,
    #[serde(rename = "modificationDate")]
    pub modification_date: Option<DateTime<Utc>>,
    #[serde(rename = "fairsendenId")]
    pub fairsenden_id: Option<String>,
    #[serde(rename = "depotId")]
    pub depot_id: Option<String>,
}

impl Resource for ScanHistory {
    const NAME: &'static str = "ScanHistory";

    fn schema() -> &'static Schema {
        &SCAN_HISTORY_SCHEMA
    }
}
