//! The two parties of a shipment.
//!
//! [`Sender`] and [`Recipient`] carry the same contact fields and a nested
//! [`Address`](crate::resources::Address); they are distinct types because
//! the workflow treats them differently (only the recipient address is
//! resolved and coverage-checked before submission).

use serde::{Deserialize, Serialize};

use crate::resources::address::{Address, ADDRESS_SCHEMA};
use crate::resources::model::Resource;
use crate::resources::schema::{Field, Schema};

const CONTACT_FIELDS: &[Field] = &[
    Field::str("salutation"),
    Field::str("title"),
    Field::str("company"),
    Field::str("email"),
    Field::has_one("address", &ADDRESS_SCHEMA),
    Field::str("phone"),
    Field::str("first_name"),
    Field::str("last_name"),
];

pub(crate) static SENDER_SCHEMA: Schema = Schema {
    name: "Sender",
    primary_key: "id",
    fields: CONTACT_FIELDS,
    rules: &[],
};

pub(crate) static RECIPIENT_SCHEMA: Schema = Schema {
    name: "Recipient",
    primary_key: "id",
    fields: CONTACT_FIELDS,
    rules: &[],
};

/// The party a shipment originates from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sender {
    pub salutation: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Resource for Sender {
    const NAME: &'static str = "Sender";

    fn schema() -> &'static Schema {
        &SENDER_SCHEMA
    }
}

/// The party a shipment is delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipient {
    pub salutation: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Resource for Recipient {
    const NAME: &'static str = "Recipient";

    fn schema() -> &'static Schema {
        &RECIPIENT_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_address_hydrates_through_the_relation() {
        let recipient = Recipient::hydrate(&json!({
            "first_name": "Erika",
            "last_name": "Mustermann",
            "address": {"street": "Main St 1", "zip": "10115", "city": "Berlin"}
        }))
        .unwrap();
        let address = recipient.address.unwrap();
        assert_eq!(address.zip.as_deref(), Some("10115"));
        assert_eq!(address.countrycode, "DE");
    }

    #[test]
    fn test_contacts_have_no_rules_of_their_own() {
        assert!(Sender::default().validate().is_ok());
        assert!(Recipient::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_nested_address_fails_contact_validation() {
        let sender = Sender {
            address: Some(Address {
                street: Some("Main St 1".to_string()),
                ..Address::default()
            }),
            ..Sender::default()
        };
        assert!(sender.validate().is_err());
    }
}
