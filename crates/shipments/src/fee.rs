//! Fee strategies.

use std::sync::Arc;

use crate::shipment::Shipment;

/// Per-kilogram surcharge applied by [`StandardFeePolicy`].
pub const PER_KG_SURCHARGE: f64 = 1.20;

/// Pluggable fee strategy.
///
/// Implementations must be pure: no side effects, no storage access.
pub trait FeePolicy: Send + Sync {
    fn compute(&self, shipment: &Shipment) -> f64;
}

impl<P> FeePolicy for Arc<P>
where
    P: FeePolicy + ?Sized,
{
    fn compute(&self, shipment: &Shipment) -> f64 {
        (**self).compute(shipment)
    }
}

/// Default policy: `(base_fee + weight_kg * 1.20) * risk_factor`, with base
/// fee and risk factor taken from the shipment's type.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StandardFeePolicy;

impl StandardFeePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl FeePolicy for StandardFeePolicy {
    fn compute(&self, shipment: &Shipment) -> f64 {
        let weight_part = shipment.weight_kg() * PER_KG_SURCHARGE;
        (shipment.base_fee() + weight_part) * shipment.risk_factor()
    }
}
