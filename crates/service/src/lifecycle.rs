//! Shipment status state machine.
//!
//! ```text
//! CREATED ──> IN_TRANSIT ──> DELIVERED
//!    │            │
//!    │            └────────> LOST
//!    └─────────────────────> LOST
//! ```
//!
//! Exactly two rules are enforced:
//!
//! 1. nothing leaves a terminal status (`DELIVERED`, `LOST`), not even a
//!    same-status update;
//! 2. `CREATED -> DELIVERED` is refused.
//!
//! Every other pair is allowed, including same-status updates such as
//! `CREATED -> CREATED` and `IN_TRANSIT -> IN_TRANSIT`, and the backward edge
//! `IN_TRANSIT -> CREATED`.

use shiptrack_core::{ShippingError, ShippingResult};
use shiptrack_shipments::ShipmentStatus;

pub fn check_transition(current: ShipmentStatus, next: ShipmentStatus) -> ShippingResult<()> {
    if current.is_terminal() {
        return Err(ShippingError::invalid_state(format!(
            "Cannot update terminal status: {current}"
        )));
    }

    if current == ShipmentStatus::Created && next == ShipmentStatus::Delivered {
        return Err(ShippingError::invalid_state(
            "CREATED -> DELIVERED is not allowed. Use IN_TRANSIT first.",
        ));
    }

    Ok(())
}
