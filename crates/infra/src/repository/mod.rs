//! Shipment persistence boundary.
//!
//! Defines the storage-facing abstraction the shipping service depends on,
//! plus the in-memory backend used by the CLI and the tests.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryShipmentRepository;
pub use r#trait::ShipmentRepository;
