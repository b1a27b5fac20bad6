//! The guarded save pipeline for shipments.
//!
//! Saving a shipment is not a single request: the recipient address must
//! first be normalized, the carrier must cover the resolved zip, and a
//! requested fixed delivery day must actually be offered. The pipeline runs
//! these stages strictly in order and aborts at the first failure, so a
//! submission only ever happens with all preconditions established.

use std::fmt;

use thiserror::Error;

use crate::clients::{ApiClient, ApiError, HttpMethod};
use crate::resources::errors::{ResourceError, ValidationError};
use crate::resources::model::{start_of_day, Resource};
use crate::resources::{Address, ServiceArea, Shipment};

/// The stages of the save pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStage {
    /// Declarative validation of the shipment graph.
    Validating,
    /// Normalizing the recipient address against the carrier's records.
    AddressResolving,
    /// Checking that the resolved zip lies in an active service area.
    CoverageChecking,
    /// Checking the requested fixed delivery day, when one is set.
    DeliveryDateChecking,
    /// Creating or updating the shipment remotely.
    Submitting,
    /// The shipment was accepted.
    Done,
}

impl fmt::Display for SaveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::AddressResolving => "address-resolving",
            Self::CoverageChecking => "coverage-checking",
            Self::DeliveryDateChecking => "delivery-date-checking",
            Self::Submitting => "submitting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Why a save pipeline aborted.
#[derive(Debug, Error)]
pub enum SaveShipmentError {
    /// The shipment graph failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The recipient address yielded no normalization candidates.
    #[error("Invalid recipient address")]
    InvalidAddress,

    /// The resolved zip is outside every active service area.
    #[error("Zip {zip} is not covered by a service area")]
    ZipNotCovered {
        /// The uncovered zip code.
        zip: String,
    },

    /// The requested fixed delivery day is not offered for the address.
    #[error("Fixed delivery day not available")]
    FixedDeliveryDayNotAvailable,

    /// A resource operation inside the pipeline failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The submission request itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Runs the precondition stages and submits a [`Shipment`].
#[derive(Debug)]
pub struct SaveShipmentWorkflow<'a> {
    client: &'a ApiClient,
    stage: SaveStage,
}

impl<'a> SaveShipmentWorkflow<'a> {
    /// Creates a pipeline bound to the given transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            stage: SaveStage::Validating,
        }
    }

    /// The stage the pipeline is currently in, or stopped at.
    #[must_use]
    pub const fn stage(&self) -> SaveStage {
        self.stage
    }

    fn enter(&mut self, stage: SaveStage) {
        self.stage = stage;
        tracing::debug!(stage = %stage, "save pipeline stage");
    }

    /// Drives the pipeline to completion for one shipment.
    ///
    /// Address resolution rewrites the shipment's recipient address in
    /// place. On success the returned shipment is hydrated from the
    /// server's response; with `update_in_place` the response is also
    /// merged back into `shipment`.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's [`SaveShipmentError`]. Stages
    /// after the failing one never execute, so a coverage failure implies
    /// no submission was attempted.
    pub async fn run(
        mut self,
        shipment: &mut Shipment,
        update_in_place: bool,
    ) -> Result<Shipment, SaveShipmentError> {
        self.enter(SaveStage::Validating);
        shipment.validate()?;

        self.enter(SaveStage::AddressResolving);
        let resolved = self.resolve_recipient_address(shipment).await?;

        self.enter(SaveStage::CoverageChecking);
        let zip = resolved.zip.clone().unwrap_or_default();
        if !ServiceArea::covers_zip(self.client, &zip).await {
            return Err(SaveShipmentError::ZipNotCovered { zip });
        }

        if let Some(requested) = shipment.fixed_deliveryday {
            self.enter(SaveStage::DeliveryDateChecking);
            let earliest = resolved.earliest_fixed_delivery_date(self.client).await;
            match earliest {
                Some(earliest) if earliest <= start_of_day(requested) => {}
                _ => return Err(SaveShipmentError::FixedDeliveryDayNotAvailable),
            }
        }

        self.enter(SaveStage::Submitting);
        let (method, path) = match shipment.primary_key() {
            Some(id) => (HttpMethod::Put, format!("shipments/{id}")),
            None => (HttpMethod::Post, "shipments".to_string()),
        };
        let response = self
            .client
            .request(method, &path, shipment.values().into())
            .await?
            .ensure_success()?;

        let saved = Shipment::hydrate(response.json()).map_err(ResourceError::from)?;
        if update_in_place {
            shipment
                .rehydrate(response.json())
                .map_err(ResourceError::from)?;
        }

        self.enter(SaveStage::Done);
        Ok(saved)
    }

    /// Normalizes the recipient address in place, returning a snapshot of
    /// the resolved address for the later stages.
    async fn resolve_recipient_address(
        &self,
        shipment: &mut Shipment,
    ) -> Result<Address, SaveShipmentError> {
        let address = shipment
            .recipient
            .as_mut()
            .and_then(|recipient| recipient.address.as_mut())
            .ok_or(SaveShipmentError::InvalidAddress)?;

        if !address.resolve(self.client).await? {
            return Err(SaveShipmentError::InvalidAddress);
        }

        Ok(address.clone())
    }
}
