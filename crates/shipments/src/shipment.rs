use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shiptrack_core::{AggregateRoot, ShippingError, ShippingResult, TrackingId};

use crate::address::Address;
use crate::status::{ShipmentStatus, StatusEvent};

/// Shipment variant, chosen at creation time.
///
/// Each variant carries a fixed fee profile (base fee, risk factor, label)
/// that never changes after the shipment is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentType {
    Standard,
    Express,
    Fragile,
}

impl ShipmentType {
    pub const ALL: [ShipmentType; 3] = [
        ShipmentType::Standard,
        ShipmentType::Express,
        ShipmentType::Fragile,
    ];

    pub fn base_fee(self) -> f64 {
        match self {
            ShipmentType::Standard => 3.00,
            ShipmentType::Express => 6.50,
            ShipmentType::Fragile => 5.00,
        }
    }

    pub fn risk_factor(self) -> f64 {
        match self {
            ShipmentType::Standard => 1.00,
            ShipmentType::Express => 1.10,
            ShipmentType::Fragile => 1.35,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipmentType::Standard => "STANDARD",
            ShipmentType::Express => "EXPRESS",
            ShipmentType::Fragile => "FRAGILE",
        }
    }
}

impl core::fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShipmentType {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ShipmentType::ALL
            .into_iter()
            .find(|kind| kind.label() == normalized)
            .ok_or_else(|| ShippingError::validation(format!("Unknown shipment type: {s}")))
    }
}

/// Aggregate root: Shipment.
///
/// Everything except `status` and `events` is fixed at construction. Status
/// changes only through [`Shipment::record`], which keeps the current status
/// equal to the status of the last recorded event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    tracking_id: TrackingId,
    kind: ShipmentType,
    sender_name: String,
    receiver_name: String,
    from: Address,
    to: Address,
    weight_kg: f64,
    status: ShipmentStatus,
    events: Vec<StatusEvent>,
}

impl Shipment {
    /// Build a shipment in `CREATED` status with an empty history.
    ///
    /// Fails with a validation error for a blank sender/receiver name or a
    /// weight that is not strictly positive (NaN included).
    pub fn new(
        kind: ShipmentType,
        tracking_id: TrackingId,
        sender_name: impl Into<String>,
        receiver_name: impl Into<String>,
        from: Address,
        to: Address,
        weight_kg: f64,
    ) -> ShippingResult<Self> {
        let sender_name = sender_name.into();
        let receiver_name = receiver_name.into();

        if sender_name.trim().is_empty() {
            return Err(ShippingError::validation("Sender name is required."));
        }
        if receiver_name.trim().is_empty() {
            return Err(ShippingError::validation("Receiver name is required."));
        }
        if weight_kg.is_nan() || weight_kg <= 0.0 {
            return Err(ShippingError::validation("Weight must be > 0."));
        }

        Ok(Self {
            tracking_id,
            kind,
            sender_name,
            receiver_name,
            from,
            to,
            weight_kg,
            status: ShipmentStatus::Created,
            events: Vec::new(),
        })
    }

    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    pub fn kind(&self) -> ShipmentType {
        self.kind
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    pub fn from(&self) -> &Address {
        &self.from
    }

    pub fn to(&self) -> &Address {
        &self.to
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Read-only view of the status history, oldest first.
    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    pub fn base_fee(&self) -> f64 {
        self.kind.base_fee()
    }

    pub fn risk_factor(&self) -> f64 {
        self.kind.risk_factor()
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    /// Append a status event and move to its status.
    ///
    /// This does not check transition rules; callers own the state machine.
    pub fn record(&mut self, event: StatusEvent) {
        self.status = event.status();
        self.events.push(event);
    }

    /// `ID=.. | TYPE=.. | STATUS=.. | FROM=.. | TO=.. | WEIGHT=..kg`
    pub fn tracking_summary(&self) -> String {
        format!(
            "ID={} | TYPE={} | STATUS={} | FROM={} | TO={} | WEIGHT={}kg",
            self.tracking_id,
            self.type_label(),
            self.status,
            self.from,
            self.to,
            self.weight_kg
        )
    }

    /// One-line listing form: `{id} | {type} | {status} | {sender} -> {receiver} | {weight:.1}kg`.
    pub fn display_line(&self) -> String {
        format!(
            "{} | {} | {} | {} -> {} | {:.1}kg",
            self.tracking_id,
            self.type_label(),
            self.status,
            self.sender_name,
            self.receiver_name,
            self.weight_kg
        )
    }
}

impl AggregateRoot for Shipment {
    type Id = TrackingId;

    fn id(&self) -> &Self::Id {
        &self.tracking_id
    }

    fn version(&self) -> u64 {
        self.events.len() as u64
    }
}
