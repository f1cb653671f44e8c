//! Shipment domain module.
//!
//! This crate contains the shipment model and the fee strategy, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod address;
pub mod fee;
pub mod shipment;
pub mod status;

pub use address::Address;
pub use fee::{FeePolicy, PER_KG_SURCHARGE, StandardFeePolicy};
pub use shipment::{Shipment, ShipmentType};
pub use status::{ShipmentStatus, StatusEvent};
