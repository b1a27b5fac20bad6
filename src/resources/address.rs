//! Postal addresses and the remote lookups built on them.
//!
//! Besides being nested inside senders and recipients, an [`Address`] is the
//! entry point for two remote operations: candidate lookup against the
//! address-normalization endpoint ([`Address::possible_addresses`] and
//! [`Address::resolve`]) and the earliest-fixed-delivery-day query
//! ([`Address::earliest_fixed_delivery_date`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{ApiClient, HttpMethod, RequestBody};
use crate::resources::errors::ResourceError;
use crate::resources::model::{parse_date_time, start_of_day, Resource};
use crate::resources::schema::{Field, Rule, Schema};

pub(crate) static ADDRESS_SCHEMA: Schema = Schema {
    name: "Address",
    primary_key: "id",
    fields: &[
        Field::str("street"),
        Field::str("zip"),
        Field::str("city"),
        Field::str("countrycode"),
        Field::str("additional_information").omit_if_empty(),
        Field::str("care_of"),
    ],
    rules: &[
        Rule::Required("street"),
        Rule::Required("zip"),
        Rule::Required("city"),
        Rule::Required("countrycode"),
        Rule::Length {
            field: "countrycode",
            min: 2,
            max: 2,
        },
    ],
};

/// A postal address.
///
/// The country code defaults to `DE`; every other field starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    #[serde(default = "default_countrycode")]
    pub countrycode: String,
    pub additional_information: Option<String>,
    pub care_of: Option<String>,
}

fn default_countrycode() -> String {
    "DE".to_string()
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: None,
            zip: None,
            city: None,
            countrycode: default_countrycode(),
            additional_information: None,
            care_of: None,
        }
    }
}

impl Resource for Address {
    const NAME: &'static str = "Address";

    fn schema() -> &'static Schema {
        &ADDRESS_SCHEMA
    }
}

impl Address {
    /// Queries the normalization endpoint for candidate addresses matching
    /// this one, in the server's ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] on transport failure and
    /// [`ResourceError::Hydration`] when a candidate cannot be hydrated.
    pub async fn possible_addresses(
        &self,
        client: &ApiClient,
    ) -> Result<Vec<Self>, ResourceError> {
        let response = client
            .request(HttpMethod::Post, "addresses/", self.values().into())
            .await?;

        let mut candidates = Vec::new();
        if let Some(raw_candidates) = response
            .json()
            .get("possibleaddresses")
            .and_then(serde_json::Value::as_array)
        {
            for raw in raw_candidates {
                candidates.push(Self::hydrate(raw)?);
            }
        }

        Ok(candidates)
    }

    /// Normalizes this address in place against the best remote candidate.
    ///
    /// Returns `false` when the lookup yields no candidates, leaving the
    /// address untouched. On success the address takes the first candidate's
    /// values, except that `care_of` and `additional_information` survive
    /// locally when the candidate does not set them.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures as [`ResourceError`].
    pub async fn resolve(&mut self, client: &ApiClient) -> Result<bool, ResourceError> {
        let mut candidates = self.possible_addresses(client).await?;
        if candidates.is_empty() {
            return Ok(false);
        }

        let mut resolved = candidates.remove(0);
        if resolved.care_of.is_none() {
            resolved.care_of = self.care_of.take();
        }
        if resolved.additional_information.is_none() {
            resolved.additional_information = self.additional_information.take();
        }
        *self = resolved;

        Ok(true)
    }

    /// Looks up the earliest fixed delivery day the carrier offers for this
    /// address, truncated to midnight UTC.
    ///
    /// This is an advisory lookup: an invalid address, a transport failure,
    /// or an answer without a usable date all yield `None`.
    pub async fn earliest_fixed_delivery_date(
        &self,
        client: &ApiClient,
    ) -> Option<DateTime<Utc>> {
        if self.validate().is_err() {
            return None;
        }

        let path = format!("serviceareas/{}/fixeddeliveryday", self.zip.as_deref()?);
        // The misspelled key is what the endpoint actually expects.
        let body = RequestBody::from(json!({"senderAdress": self.values()}));

        let response = match client.request(HttpMethod::Post, &path, body).await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(%error, "fixed delivery day lookup failed");
                return None;
            }
        };

        response
            .json()
            .get("earliestFixedDeliveryDay")
            .and_then(serde_json::Value::as_str)
            .and_then(parse_date_time)
            .map(start_of_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_country_is_germany() {
        assert_eq!(Address::default().countrycode, "DE");
    }

    #[test]
    fn test_hydration_without_countrycode_falls_back_to_default() {
        let address =
            Address::hydrate(&json!({"street": "Main St", "zip": "10115", "city": "Berlin"}))
                .unwrap();
        assert_eq!(address.countrycode, "DE");
    }

    #[test]
    fn test_validation_requires_the_four_core_fields() {
        let mut address = Address::default();
        assert!(address.validate().is_err());

        address.street = Some("Main St 1".to_string());
        address.zip = Some("10115".to_string());
        address.city = Some("Berlin".to_string());
        assert!(address.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_iso_countrycode() {
        let address = Address {
            street: Some("Main St 1".to_string()),
            zip: Some("10115".to_string()),
            city: Some("Berlin".to_string()),
            countrycode: "DEU".to_string(),
            ..Address::default()
        };
        let error = address.validate().unwrap_err();
        assert!(error.message.contains("countrycode"));
    }

    #[test]
    fn test_values_omits_empty_additional_information() {
        let address = Address {
            street: Some("Main St 1".to_string()),
            ..Address::default()
        };
        let values = address.values();
        assert!(values.get("additional_information").is_none());
        // care_of has no omit override; it serializes as null.
        assert!(values.get("care_of").is_some_and(serde_json::Value::is_null));
    }
}
