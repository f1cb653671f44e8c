//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ShippingError;

/// Caller-supplied identifier of one shipment.
///
/// Non-blank by construction. The value is kept exactly as given (no trimming
/// or case folding), and ordering is plain lexicographic order of the string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingId(String);

impl TrackingId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ShippingError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ShippingError::validation("Tracking ID is required."));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `TrackingId` be queried with a plain `&str`.
impl Borrow<str> for TrackingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for TrackingId {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrackingId {
    type Error = ShippingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TrackingId> for String {
    fn from(value: TrackingId) -> Self {
        value.0
    }
}

impl TryFrom<&str> for TrackingId {
    type Error = ShippingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
