use chrono::Utc;

use shiptrack_core::{ShippingError, ShippingResult, TrackingId};
use shiptrack_infra::ShipmentRepository;
use shiptrack_shipments::{Address, FeePolicy, Shipment, ShipmentStatus, ShipmentType, StatusEvent};

use crate::lifecycle::check_transition;

/// Command: CreateShipment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateShipment {
    pub kind: ShipmentType,
    pub tracking_id: String,
    pub sender_name: String,
    pub receiver_name: String,
    pub from: Address,
    pub to: Address,
    pub weight_kg: f64,
}

/// Shipping use cases over an injected repository and fee policy.
///
/// ## Execution model
///
/// Each call runs to completion synchronously: validate, read from the
/// repository, mutate a local copy, write it back. The service adds no locking,
/// so the duplicate-id check in [`create_shipment`](Self::create_shipment) and
/// the read-modify-write in [`update_status`](Self::update_status) are not
/// atomic across concurrent callers. Single-threaded behaviour is exact.
///
/// ## Errors
///
/// Every failure is a [`ShippingError`] returned to the immediate caller. A
/// failed call performs no repository write.
#[derive(Debug)]
pub struct ShippingService<R, F> {
    repository: R,
    fee_policy: F,
}

impl<R, F> ShippingService<R, F> {
    pub fn new(repository: R, fee_policy: F) -> Self {
        Self {
            repository,
            fee_policy,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn fee_policy(&self) -> &F {
        &self.fee_policy
    }

    pub fn into_parts(self) -> (R, F) {
        (self.repository, self.fee_policy)
    }
}

impl<R, F> ShippingService<R, F>
where
    R: ShipmentRepository,
    F: FeePolicy,
{
    /// Create a shipment in `CREATED` status with one `CREATED` event, and persist it.
    ///
    /// Fails with `Validation` for the first invalid field (tracking id, sender,
    /// receiver, weight) and with `Validation("Tracking ID already exists: {id}")`
    /// when the id is taken.
    pub fn create_shipment(&self, cmd: CreateShipment) -> ShippingResult<Shipment> {
        let CreateShipment {
            kind,
            tracking_id,
            sender_name,
            receiver_name,
            from,
            to,
            weight_kg,
        } = cmd;

        let tracking_id = TrackingId::parse(tracking_id)?;
        let mut shipment = Shipment::new(
            kind,
            tracking_id,
            sender_name,
            receiver_name,
            from,
            to,
            weight_kg,
        )?;

        let id = shipment.tracking_id().as_str();
        if self.repository.find_by_tracking_id(id).is_some() {
            tracing::debug!(tracking_id = id, "rejected duplicate tracking id");
            return Err(ShippingError::validation(format!(
                "Tracking ID already exists: {id}"
            )));
        }

        shipment.record(StatusEvent::new(
            Utc::now(),
            ShipmentStatus::Created,
            Some("Created".to_string()),
        ));

        self.repository.save(shipment.clone());
        tracing::debug!(
            tracking_id = %shipment.tracking_id(),
            kind = %shipment.kind(),
            weight_kg = shipment.weight_kg(),
            "shipment created"
        );

        Ok(shipment)
    }

    /// Fails with `NotFound("Shipment not found: {id}")` for an unknown id.
    pub fn get_by_tracking_id(&self, tracking_id: &str) -> ShippingResult<Shipment> {
        self.repository
            .find_by_tracking_id(tracking_id)
            .ok_or_else(|| ShippingError::not_found(format!("Shipment not found: {tracking_id}")))
    }

    /// Move a shipment to `new_status`, append a `Status changed to {status}`
    /// event and persist it.
    ///
    /// See [`check_transition`] for the rules.
    pub fn update_status(&self, tracking_id: &str, new_status: ShipmentStatus) -> ShippingResult<()> {
        let mut shipment = self.get_by_tracking_id(tracking_id)?;
        let previous = shipment.status();

        if let Err(err) = check_transition(previous, new_status) {
            tracing::debug!(
                tracking_id,
                from = %previous,
                to = %new_status,
                kind = %err.kind(),
                "status transition rejected"
            );
            return Err(err);
        }

        shipment.record(StatusEvent::new(
            Utc::now(),
            new_status,
            Some(format!("Status changed to {new_status}")),
        ));
        self.repository.save(shipment);

        tracing::debug!(tracking_id, from = %previous, to = %new_status, "status updated");
        Ok(())
    }

    pub fn calculate_fee(&self, tracking_id: &str) -> ShippingResult<f64> {
        let shipment = self.get_by_tracking_id(tracking_id)?;
        Ok(self.fee_policy.compute(&shipment))
    }

    /// All shipments, ascending by tracking id.
    pub fn list_all(&self) -> Vec<Shipment> {
        let mut shipments = self.repository.find_all();
        shipments.sort_by(|a, b| a.tracking_id().cmp(b.tracking_id()));
        shipments
    }
}
