use serde::Serialize;

use shiptrack_core::{ShippingError, ShippingResult, ValueObject};

/// Postal address: a city plus a free-form address line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    city: String,
    line: String,
}

impl Address {
    /// Both parts must be non-blank after trimming; they are stored as given.
    pub fn new(city: impl Into<String>, line: impl Into<String>) -> ShippingResult<Self> {
        let city = city.into();
        let line = line.into();
        if city.trim().is_empty() {
            return Err(ShippingError::validation("City is required."));
        }
        if line.trim().is_empty() {
            return Err(ShippingError::validation("Address line is required."));
        }
        Ok(Self { city, line })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl ValueObject for Address {}

/// Short form: `{city} / {line}`.
impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {}", self.city, self.line)
    }
}
