//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and service layers.
pub type ShippingResult<T> = Result<T, ShippingError>;

/// Domain-level error.
///
/// Every failure the shipping core reports to its callers is one of these
/// three kinds. The enum itself is the shared category, so a caller can match
/// "any domain error" separately from I/O or other unexpected failures.
///
/// `Display` renders the bare message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShippingError {
    /// Malformed or missing input, duplicate key.
    #[error("{0}")]
    Validation(String),

    /// A referenced tracking id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A requested status transition is not allowed.
    #[error("{0}")]
    InvalidState(String),
}

/// Discriminant of [`ShippingError`] without its message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShippingErrorKind {
    Validation,
    NotFound,
    InvalidState,
}

impl ShippingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn kind(&self) -> ShippingErrorKind {
        match self {
            ShippingError::Validation(_) => ShippingErrorKind::Validation,
            ShippingError::NotFound(_) => ShippingErrorKind::NotFound,
            ShippingError::InvalidState(_) => ShippingErrorKind::InvalidState,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ShippingError::Validation(msg)
            | ShippingError::NotFound(msg)
            | ShippingError::InvalidState(msg) => msg,
        }
    }
}

impl core::fmt::Display for ShippingErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ShippingErrorKind::Validation => "validation",
            ShippingErrorKind::NotFound => "not_found",
            ShippingErrorKind::InvalidState => "invalid_state",
        };
        f.write_str(name)
    }
}
