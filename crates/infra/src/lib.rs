//! Infrastructure layer: shipment storage and runtime configuration.

pub mod config;
pub mod repository;

pub use config::{ConfigError, TrackerConfig};
pub use repository::{InMemoryShipmentRepository, ShipmentRepository};
