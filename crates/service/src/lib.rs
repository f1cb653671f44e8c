//! Shipping use cases (application-level orchestration).
//!
//! `ShippingService` is the only place business rules live: input validation,
//! tracking id uniqueness, the status state machine, fee lookup and listing.
//! It talks to storage and pricing only through the `ShipmentRepository` and
//! `FeePolicy` traits, and performs no IO of its own.

pub mod lifecycle;
pub mod service;

pub use lifecycle::check_transition;
pub use service::{CreateShipment, ShippingService};
