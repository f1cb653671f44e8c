use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shiptrack_core::{ShippingError, ValueObject};

/// Shipment status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Created,
    InTransit,
    Delivered,
    Lost,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Created,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Lost,
    ];

    /// Terminal statuses have no outbound transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::Created => "CREATED",
            ShipmentStatus::InTransit => "IN_TRANSIT",
            ShipmentStatus::Delivered => "DELIVERED",
            ShipmentStatus::Lost => "LOST",
        }
    }
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ShippingError;

    /// Accepts the status names case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ShipmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ShippingError::validation(format!("Unknown shipment status: {s}")))
    }
}

/// One entry of a shipment's status history.
///
/// Created on every status transition and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    time: DateTime<Utc>,
    status: ShipmentStatus,
    note: String,
}

impl StatusEvent {
    /// A missing note is stored as the empty string.
    pub fn new(time: DateTime<Utc>, status: ShipmentStatus, note: Option<String>) -> Self {
        Self {
            time,
            status,
            note: note.unwrap_or_default(),
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// `{time} | {STATUS} | {note}`
    pub fn display_line(&self) -> String {
        format!("{} | {} | {}", self.time, self.status, self.note)
    }
}

impl ValueObject for StatusEvent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delivered_and_lost_are_terminal() {
        assert!(!ShipmentStatus::Created.is_terminal());
        assert!(!ShipmentStatus::InTransit.is_terminal());
        assert!(ShipmentStatus::Delivered.is_terminal());
        assert!(ShipmentStatus::Lost.is_terminal());
    }

    #[test]
    fn display_uses_upper_snake_case_names() {
        assert_eq!(ShipmentStatus::InTransit.to_string(), "IN_TRANSIT");
        assert_eq!(ShipmentStatus::Created.to_string(), "CREATED");
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_dashes() {
        assert_eq!("in-transit".parse::<ShipmentStatus>().unwrap(), ShipmentStatus::InTransit);
        assert_eq!(" Lost ".parse::<ShipmentStatus>().unwrap(), ShipmentStatus::Lost);
        assert_eq!("DELIVERED".parse::<ShipmentStatus>().unwrap(), ShipmentStatus::Delivered);
    }

    #[test]
    fn parse_rejects_unknown_status() {
        let err = "shipped".parse::<ShipmentStatus>().unwrap_err();
        assert_eq!(err, ShippingError::validation("Unknown shipment status: shipped"));
    }

    #[test]
    fn serde_names_match_display() {
        for status in ShipmentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let back: ShipmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn missing_note_defaults_to_empty() {
        let event = StatusEvent::new(Utc::now(), ShipmentStatus::Created, None);
        assert_eq!(event.note(), "");
        assert_eq!(event.status(), ShipmentStatus::Created);
    }

    #[test]
    fn display_line_joins_time_status_and_note() {
        let time = Utc::now();
        let event = StatusEvent::new(time, ShipmentStatus::Lost, Some("Status changed to LOST".into()));
        assert_eq!(
            event.display_line(),
            format!("{time} | LOST | Status changed to LOST")
        );
    }
}
