//! Delivery time windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};

pub(crate) static TIMESLOT_SCHEMA: Schema = Schema {
    name: "Timeslot",
    primary_key: "id",
    fields: &[
        Field::date_time("start"),
        Field::date_time("end"),
        Field::bool("is_available"),
    ],
    rules: &[],
};

/// A delivery window offered by the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timeslot {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub is_available: Option<bool>,
}

impl Resource for Timeslot {
    const NAME: &'static str = "Timeslot";

    fn schema() -> &'static Schema {
        &TIMESLOT_SCHEMA
    }
}
