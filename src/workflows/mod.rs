//! Multi-stage orchestration built on top of the resource verbs.

mod save_shipment;

pub use save_shipment::{SaveShipmentError, SaveShipmentWorkflow, SaveStage};
