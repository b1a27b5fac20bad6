//! Delivery state snapshots nested in shipments, parcels, and histories.

use serde::{Deserialize, Serialize};

use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};

pub(crate) static STATE_SCHEMA: Schema = Schema {
    name: "State",
    primary_key: "id",
    fields: &[Field::str("state"), Field::str("description")],
    rules: &[],
};

/// A named delivery state with its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    pub state: Option<String>,
    pub description: Option<String>,
}

impl Resource for State {
    const NAME: &'static str = "State";

    fn schema() -> &'static Schema {
        &STATE_SCHEMA
    }
}
