//! Per-shipment delivery preferences.

use serde::{Deserialize, Serialize};

use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};

pub(crate) static DELIVERY_OPTIONS_SCHEMA: Schema = Schema {
    name: "DeliveryOptions",
    primary_key: "id",
    fields: &[
        Field::str("pin"),
        Field::bool("neighbourAllowed"),
        Field::bool("storageLocationAllowed"),
        Field::bool("signatureRequired"),
    ],
    rules: &[],
};

/// Options controlling how a shipment may be handed over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryOptions {
    pub pin: Option<String>,
    #[serde(rename = "neighbourAllowed")]
    pub neighbour_allowed: Option<bool>,
    #[serde(rename = "storageLocationAllowed")]
    pub storage_location_allowed: Option<bool>,
    #[serde(rename = "signatureRequired")]
    pub signature_required: Option<bool>,
}

impl Resource for DeliveryOptions {
    const NAME: &'static str = "DeliveryOptions";

    fn schema() -> &'static Schema {
        &DELIVERY_OPTIONS_SCHEMA
    }
}
