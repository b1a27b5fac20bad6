//! Integration tests for the shipment save pipeline.
//!
//! These tests verify the full stage order against a mock API: address
//! resolution, service-area coverage, fixed-delivery-day feasibility, and
//! submission, including that failed preconditions stop the pipeline before
//! any later call is made.

use fairsenden::{
    ApiClient, ClientId, ClientSecret, Config, ResourceError, SaveShipmentError, Shipment,
};
use fairsenden::resources::{Address, Parcel, Recipient, Sender};
use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server, with the token endpoint
/// mounted and answering.
async fn create_client(server: &MockServer) -> ApiClient {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "expires_in": 3600
        })))
        .mount(server)
        .await;

    let config = Config::builder()
        .client_id(ClientId::new("test-client").unwrap())
        .client_secret(ClientSecret::new("test-secret").unwrap())
        .base_url(server.uri())
        .token_url(format!("{}/oauth2/token", server.uri()))
        .build()
        .unwrap();

    ApiClient::new(&config)
}

fn test_shipment() -> Shipment {
    Shipment {
        sender: Some(Sender {
            first_name: Some("Max".to_string()),
            last_name: Some("Mustermann".to_string()),
            address: Some(Address {
                street: Some("Senderweg 1".to_string()),
                zip: Some("20095".to_string()),
                city: Some("Hamburg".to_string()),
                ..Address::default()
            }),
            ..Sender::default()
        }),
        recipient: Some(Recipient {
            first_name: Some("Erika".to_string()),
            last_name: Some("Mustermann".to_string()),
            address: Some(Address {
                street: Some("Hauptstr. 5".to_string()),
                zip: Some("10115".to_string()),
                city: Some("Berlin".to_string()),
                ..Address::default()
            }),
            ..Recipient::default()
        }),
        ..Shipment::default()
    }
}

/// Mounts the address-normalization endpoint echoing one candidate.
async fn mount_resolvable_address(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/addresses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "possibleaddresses": [
                {"street": "Hauptstraße 5", "zip": "10115", "city": "Berlin", "countrycode": "DE"}
            ]
        })))
        .mount(server)
        .await;
}

async fn mount_covered_zip(server: &MockServer, zip: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/serviceareas/{zip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": true})))
        .mount(server)
        .await;
}

// ============================================================================
// Save pipeline: happy path
// ============================================================================

#[tokio::test]
async fn test_save_creates_shipment_after_all_preconditions() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "shipmentId": "s-100",
            "trackUrl": "https://track.example/s-100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    let saved = shipment.save(&client, false).await.unwrap();

    assert_eq!(saved.shipment_id.as_deref(), Some("s-100"));
    // Without update_in_place the local object keeps its unsaved state.
    assert!(shipment.shipment_id.is_none());
    // But the recipient address was normalized in place.
    let address = shipment.recipient.unwrap().address.unwrap();
    assert_eq!(address.street.as_deref(), Some("Hauptstraße 5"));
}

#[tokio::test]
async fn test_save_with_update_in_place_merges_the_response() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "shipmentId": "s-101"
        })))
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    shipment.customer_reference_id = Some("order-77".to_string());
    shipment.save(&client, true).await.unwrap();

    assert_eq!(shipment.shipment_id.as_deref(), Some("s-101"));
    // Fields the response does not mention survive the merge.
    assert_eq!(shipment.customer_reference_id.as_deref(), Some("order-77"));
}

#[tokio::test]
async fn test_save_updates_via_put_when_the_shipment_has_an_id() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    Mock::given(method("PUT"))
        .and(path("/shipments/s-200"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"shipmentId": "s-200"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    shipment.shipment_id = Some("s-200".to_string());
    let saved = shipment.save(&client, false).await.unwrap();
    assert_eq!(saved.shipment_id.as_deref(), Some("s-200"));
}

// ============================================================================
// Save pipeline: precondition failures short-circuit
// ============================================================================

#[tokio::test]
async fn test_invalid_shipment_never_reaches_the_network() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/addresses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    // No recipient: validation fails before any request.
    let mut shipment = Shipment {
        sender: Some(Sender::default()),
        ..Shipment::default()
    };
    let error = shipment.save(&client, false).await.unwrap_err();
    assert!(matches!(error, SaveShipmentError::Validation(_)));
}

#[tokio::test]
async fn test_unresolvable_address_skips_coverage_and_submission() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    // Zero candidates.
    Mock::given(method("POST"))
        .and(path("/addresses/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"possibleaddresses": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/serviceareas/10115"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": true})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    let error = shipment.save(&client, false).await.unwrap_err();
    assert!(matches!(error, SaveShipmentError::InvalidAddress));
}

#[tokio::test]
async fn test_uncovered_zip_skips_submission() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;

    Mock::given(method("GET"))
        .and(path("/serviceareas/10115"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": false})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    let error = shipment.save(&client, false).await.unwrap_err();
    match error {
        SaveShipmentError::ZipNotCovered { zip } => assert_eq!(zip, "10115"),
        other => panic!("Expected ZipNotCovered, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_late_fixed_delivery_day_skips_submission() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    // Requested 2024-01-10, but the earliest available day is 2024-01-15.
    Mock::given(method("POST"))
        .and(path("/serviceareas/10115/fixeddeliveryday"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "earliestFixedDeliveryDay": "2024-01-15T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    shipment.fixed_deliveryday = Some("2024-01-10T00:00:00Z".parse().unwrap());
    let error = shipment.save(&client, false).await.unwrap_err();
    assert!(matches!(
        error,
        SaveShipmentError::FixedDeliveryDayNotAvailable
    ));
}

#[tokio::test]
async fn test_available_fixed_delivery_day_proceeds_to_submission() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    Mock::given(method("POST"))
        .and(path("/serviceareas/10115/fixeddeliveryday"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "earliestFixedDeliveryDay": "2024-01-08T00:00:00Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"shipmentId": "s-300"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    shipment.fixed_deliveryday = Some("2024-01-10T14:00:00Z".parse().unwrap());
    let saved = shipment.save(&client, false).await.unwrap();
    assert_eq!(saved.shipment_id.as_deref(), Some("s-300"));
}

#[tokio::test]
async fn test_rejected_submission_surfaces_the_status() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    mount_resolvable_address(&server).await;
    mount_covered_zip(&server, "10115").await;

    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "bad"})))
        .mount(&server)
        .await;

    let mut shipment = test_shipment();
    let error = shipment.save(&client, false).await.unwrap_err();
    match error {
        SaveShipmentError::Api(fairsenden::ApiError::Unsuccessful { status, .. }) => {
            assert_eq!(status, 422);
        }
        other => panic!("Expected Unsuccessful, got: {other:?}"),
    }
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_find_hydrates_the_full_graph() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/shipments/s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipmentId": "s-1",
            "deliveryState": {"state": "IN_TRANSIT", "description": "On the way"},
            "history": [
                {"modificationDate": "2024-01-09T10:00:00Z", "new_state": {"state": "CREATED"}}
            ],
            "parcels": [{"parcelId": "pa-1", "weight": 1200}]
        })))
        .mount(&server)
        .await;

    let shipment = Shipment::find(&client, "s-1").await.unwrap();
    assert_eq!(
        shipment.delivery_state.as_ref().unwrap().state.as_deref(),
        Some("IN_TRANSIT")
    );
    assert_eq!(shipment.history.len(), 1);
    assert!(shipment.has_parcel("pa-1"));
}

#[tokio::test]
async fn test_find_returns_none_for_missing_shipments() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/shipments/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(Shipment::find(&client, "nope").await.is_none());
}

#[tokio::test]
async fn test_find_with_empty_id_makes_no_request() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    assert!(Shipment::find(&client, "").await.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Confirmation, deletion, parcels
// ============================================================================

#[tokio::test]
async fn test_confirm_puts_the_raw_status_body() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("PUT"))
        .and(path("/shipments/s-1/status"))
        .and(body_string("CUSTOMER_CONFIRMED"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let shipment = Shipment {
        shipment_id: Some("s-1".to_string()),
        ..Shipment::default()
    };
    shipment.confirm(&client).await.unwrap();
}

#[tokio::test]
async fn test_confirm_requires_a_primary_key() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    let error = Shipment::default().confirm(&client).await.unwrap_err();
    assert!(matches!(error, ResourceError::PrimaryKeyMissing { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_targets_the_shipment_path() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/shipments/s-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let shipment = Shipment {
        shipment_id: Some("s-1".to_string()),
        ..Shipment::default()
    };
    shipment.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_save_parcel_posts_new_and_puts_existing() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/shipments/s-1/parcels"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/shipments/s-1/parcels/pa-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let shipment = Shipment {
        shipment_id: Some("s-1".to_string()),
        ..Shipment::default()
    };

    let new_parcel = Parcel {
        weight: Some(500),
        ..Parcel::default()
    };
    shipment.save_parcel(&client, &new_parcel).await.unwrap();

    let existing = Parcel {
        parcel_id: Some("pa-1".to_string()),
        ..Parcel::default()
    };
    shipment.save_parcel(&client, &existing).await.unwrap();
}

#[tokio::test]
async fn test_delete_parcel_requires_the_parcel_id() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    let shipment = Shipment {
        shipment_id: Some("s-1".to_string()),
        ..Shipment::default()
    };

    let error = shipment
        .delete_parcel(&client, &Parcel::default())
        .await
        .unwrap_err();
    assert!(matches!(error, ResourceError::ForeignKeyMissing { .. }));

    let error = shipment
        .delete_parcel_by_id(&client, "")
        .await
        .unwrap_err();
    assert!(matches!(error, ResourceError::ForeignKeyMissing { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_parcel_targets_the_nested_path() {
    let server = MockServer::start().await;
    let client = create_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/shipments/s-1/parcels/pa-9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let shipment = Shipment {
        shipment_id: Some("s-1".to_string()),
        ..Shipment::default()
    };
    shipment.delete_parcel_by_id(&client, "pa-9").await.unwrap();
}
