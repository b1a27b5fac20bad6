//! The shipment aggregate and its API verbs.
//!
//! [`Shipment`] is the root of the resource graph: it nests both parties,
//! the delivery state, timeslots, options, histories, deliveries, and
//! parcels. Its verbs cover lookup ([`Shipment::find`]), the guarded save
//! pipeline ([`Shipment::save`]), confirmation, deletion, and parcel
//! management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpMethod, RequestBody};
use crate::resources::contact::{Recipient, Sender, RECIPIENT_SCHEMA, SENDER_SCHEMA};
use crate::resources::delivery::{Delivery, DELIVERY_SCHEMA};
use crate::resources::delivery_options::{DeliveryOptions, DELIVERY_OPTIONS_SCHEMA};
use crate::resources::errors::ResourceError;
use crate::resources::history::{
    ScanHistory, ShipmentHistory, SCAN_HISTORY_SCHEMA, SHIPMENT_HISTORY_SCHEMA,
};
use crate::resources::model::Resource;
use crate::resources::parcel::{Parcel, PARCEL_SCHEMA};
use crate::resources::schema::{Field, Rule, Schema};
use crate::resources::state::{State, STATE_SCHEMA};
use crate::resources::timeslot::{Timeslot, TIMESLOT_SCHEMA};
use crate::workflows::{SaveShipmentError, SaveShipmentWorkflow};

pub(crate) static SHIPMENT_SCHEMA: Schema = Schema {
    name: "Shipment",
    primary_key: "shipmentId",
    fields: &[
        Field::str("shipmentId"),
        Field::has_one("sender", &SENDER_SCHEMA),
        Field::has_one("recipient", &RECIPIENT_SCHEMA),
        Field::has_one("deliveryState", &STATE_SCHEMA),
        Field::has_many("history", &SHIPMENT_HISTORY_SCHEMA),
        Field::str("timeslotUrl"),
        Field::str("trackUrl"),
        Field::has_one("selectedTimeslot", &TIMESLOT_SCHEMA),
        Field::has_one("selectedReturnTimeslot", &TIMESLOT_SCHEMA),
        Field::str("customerReferenceId"),
        Field::bool("oversized"),
        Field::date_time("fixedDeliveryday").date_only(),
        Field::bool("returnable"),
        Field::str("deliveryType"),
        Field::str("accessToken"),
        Field::has_one("deliveryOptions", &DELIVERY_OPTIONS_SCHEMA),
        Field::str("merchantId"),
        Field::has_many("scanHistory", &SCAN_HISTORY_SCHEMA),
        Field::has_many("deliveries", &DELIVERY_SCHEMA),
        Field::int("totalWeight"),
        Field::int("totalVolume"),
        Field::has_many("parcels", &PARCEL_SCHEMA),
    ],
    rules: &[Rule::Required("sender"), Rule::Required("recipient")],
};

/// A shipment with all of its nested resources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "shipmentId")]
    pub shipment_id: Option<String>,
    pub sender: Option<Sender>,
    pub recipient: Option<Recipient>,
    #[serde(rename = "deliveryState")]
    pub delivery_state: Option<State>,
    #[serde(default)]
    pub history: Vec<ShipmentHistory>,
    #[serde(rename = "timeslotUrl")]
    pub timeslot_url: Option<String>,
    #[serde(rename = "trackUrl")]
    pub track_url: Option<String>,
    #[serde(rename = "selectedTimeslot")]
    pub selected_timeslot: Option<Timeslot>,
    #[serde(rename = "selectedReturnTimeslot")]
    pub selected_return_timeslot: Option<Timeslot>,
    #[serde(rename = "customerReferenceId")]
    pub customer_reference_id: Option<String>,
    pub oversized: Option<bool>,
    #[serde(rename = "fixedDeliveryday")]
    pub fixed_deliveryday: Option<DateTime<Utc>>,
    pub returnable: Option<bool>,
    #[serde(rename = "deliveryType")]
    pub delivery_type: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(rename = "deliveryOptions")]
    pub delivery_options: Option<DeliveryOptions>,
    #[serde(rename = "merchantId")]
    pub merchant_id: Option<String>,
    #[serde(rename = "scanHistory", default)]
    pub scan_history: Vec<ScanHistory>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(rename = "totalWeight")]
    pub total_weight: Option<i64>,
    #[serde(rename = "totalVolume")]
    pub total_volume: Option<i64>,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
}

impl Resource for Shipment {
    const NAME: &'static str = "Shipment";

    fn schema() -> &'static Schema {
        &SHIPMENT_SCHEMA
    }
}

impl Shipment {
    /// Looks up a shipment by id.
    ///
    /// This is a strict read used optimistically: an empty id, a transport
    /// failure, a non-success status, or an unhydratable payload all yield
    /// `None`.
    pub async fn find(client: &ApiClient, id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }

        let path = format!("shipments/{id}");
        let response = match client.request(HttpMethod::Get, &path, RequestBody::None).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                tracing::debug!(id, status = response.status, "shipment lookup unsuccessful");
                return None;
            }
            Err(error) => {
                tracing::debug!(id, %error, "shipment lookup failed");
                return None;
            }
        };

        Self::hydrate(response.json()).ok()
    }

    /// Runs the full precondition pipeline and submits this shipment.
    ///
    /// Creation and update are distinguished by the presence of the primary
    /// key. The returned shipment is hydrated from the server's response;
    /// with `update_in_place` the response is additionally merged back into
    /// `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveShipmentError`] naming the first failing stage; no
    /// submission happens after a failed precondition.
    pub async fn save(
        &mut self,
        client: &ApiClient,
        update_in_place: bool,
    ) -> Result<Self, SaveShipmentError> {
        SaveShipmentWorkflow::new(client)
            .run(self, update_in_place)
            .await
    }

    /// Marks this shipment as confirmed by the customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PrimaryKeyMissing`] on an unsaved shipment
    /// and surfaces transport or non-success responses as-is.
    pub async fn confirm(&self, client: &ApiClient) -> Result<(), ResourceError> {
        let id = self.require_primary_key()?;
        let path = format!("shipments/{id}/status");
        client
            .request(HttpMethod::Put, &path, RequestBody::from("CUSTOMER_CONFIRMED"))
            .await?
            .ensure_success()?;
        Ok(())
    }

    /// Deletes this shipment remotely.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PrimaryKeyMissing`] on an unsaved shipment
    /// and surfaces transport or non-success responses as-is.
    pub async fn delete(&self, client: &ApiClient) -> Result<(), ResourceError> {
        let id = self.require_primary_key()?;
        let path = format!("shipments/{id}");
        client
            .request(HttpMethod::Delete, &path, RequestBody::None)
            .await?
            .ensure_success()?;
        Ok(())
    }

    /// Returns whether a parcel with the given id belongs to this shipment.
    #[must_use]
    pub fn has_parcel(&self, parcel_id: &str) -> bool {
        self.parcels
            .iter()
            .any(|parcel| parcel.parcel_id.as_deref() == Some(parcel_id))
    }

    /// Creates or updates a parcel under this shipment, keyed by the
    /// parcel's own primary key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PrimaryKeyMissing`] on an unsaved shipment
    /// and surfaces transport or non-success responses as-is.
    pub async fn save_parcel(
        &self,
        client: &ApiClient,
        parcel: &Parcel,
    ) -> Result<(), ResourceError> {
        let id = self.require_primary_key()?;

        let (method, path) = match parcel.primary_key() {
            Some(parcel_id) => (
                HttpMethod::Put,
                format!("shipments/{id}/parcels/{parcel_id}"),
            ),
            None => (HttpMethod::Post, format!("shipments/{id}/parcels")),
        };

        client
            .request(method, &path, parcel.values().into())
            .await?
            .ensure_success()?;
        Ok(())
    }

    /// Removes a parcel from this shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ForeignKeyMissing`] when the parcel has no
    /// id yet, [`ResourceError::PrimaryKeyMissing`] on an unsaved shipment,
    /// and surfaces transport or non-success responses as-is.
    pub async fn delete_parcel(
        &self,
        client: &ApiClient,
        parcel: &Parcel,
    ) -> Result<(), ResourceError> {
        let parcel_id = parcel
            .primary_key()
            .ok_or(ResourceError::ForeignKeyMissing {
                resource: Self::NAME,
                key: "parcelId",
            })?;
        self.delete_parcel_by_id(client, &parcel_id).await
    }

    /// Removes a parcel from this shipment by its id.
    ///
    /// # Errors
    ///
    /// Same conditions as [`delete_parcel`](Shipment::delete_parcel).
    pub async fn delete_parcel_by_id(
        &self,
        client: &ApiClient,
        parcel_id: &str,
    ) -> Result<(), ResourceError> {
        if parcel_id.is_empty() {
            return Err(ResourceError::ForeignKeyMissing {
                resource: Self::NAME,
                key: "parcelId",
            });
        }

        let id = self.require_primary_key()?;
        let path = format!("shipments/{id}/parcels/{parcel_id}");
        client
            .request(HttpMethod::Delete, &path, RequestBody::None)
            .await?
            .ensure_success()?;
        Ok(())
    }

    fn require_primary_key(&self) -> Result<String, ResourceError> {
        self.primary_key()
            .ok_or(ResourceError::PrimaryKeyMissing {
                resource: Self::NAME,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_deliveryday_serializes_as_bare_date() {
        let shipment = Shipment::hydrate(&json!({
            "shipmentId": "s-1",
            "fixedDeliveryday": "2024-01-10T08:30:00Z"
        }))
        .unwrap();
        assert_eq!(shipment.values()["fixedDeliveryday"], json!("2024-01-10"));
    }

    #[test]
    fn test_validation_requires_both_parties() {
        let mut shipment = Shipment::default();
        assert!(shipment.validate().is_err());

        shipment.sender = Some(Sender::default());
        assert!(shipment.validate().is_err());

        shipment.recipient = Some(Recipient::default());
        assert!(shipment.validate().is_ok());
    }

    #[test]
    fn test_has_parcel_matches_on_parcel_id() {
        let shipment = Shipment::hydrate(&json!({
            "shipmentId": "s-2",
            "parcels": [{"parcelId": "pa-1"}, {"parcelId": "pa-2"}]
        }))
        .unwrap();
        assert!(shipment.has_parcel("pa-2"));
        assert!(!shipment.has_parcel("pa-9"));
    }

    #[test]
    fn test_collections_serialize_as_arrays_even_when_empty() {
        let values = Shipment::default().values();
        for key in ["history", "scanHistory", "deliveries", "parcels"] {
            assert_eq!(values[key], json!([]), "{key} must be an array");
        }
    }
}
