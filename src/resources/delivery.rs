//! Delivery attempt records with their geocoordinates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};

pub(crate) static COORDINATES_SCHEMA: Schema = Schema {
    name: "Coordinates",
    primary_key: "id",
    fields: &[Field::float("latitude"), Field::float("longitude")],
    rules: &[],
};

pub(crate) static DELIVERY_SCHEMA: Schema = Schema {
    name: "Delivery",
    primary_key: "id",
    fields: &[
        Field::str("deliveryEvent"),
        Field::date_time("deliveryTime"),
        Field::str("pictureName"),
        Field::str("signatureName"),
        Field::str("reason"),
        Field::has_one("geocoordinate", &COORDINATES_SCHEMA),
    ],
    rules: &[],
};

/// A WGS 84 point attached to a delivery event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Resource for Coordinates {
    const NAME: &'static str = "Coordinates";

    fn schema() -> &'static Schema {
        &COORDINATES_SCHEMA
    }
}

/// A delivery attempt, successful or not.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "deliveryEvent")]
    pub delivery_event: Option<String>,
    #[serde(rename = "deliveryTime")]
    pub delivery_time: Option<DateTime<Utc>>,
    #[serde(rename = "pictureName")]
    pub picture_name: Option<String>,
    #[serde(rename = "signatureName")]
    pub signature_name: Option<String>,
    pub reason: Option<String>,
    pub geocoordinate: Option<Coordinates>,
}

impl Resource for Delivery {
    const NAME: &'static str = "Delivery";

    fn schema() -> &'static Schema {
        &DELIVERY_SCHEMA
    }
}
