use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use shiptrack_core::TrackingId;
use shiptrack_shipments::Shipment;

use super::r#trait::ShipmentRepository;

/// In-memory shipment store.
///
/// Intended for tests/dev and the console app. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryShipmentRepository {
    inner: RwLock<HashMap<TrackingId, Shipment>>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A panic while holding the lock cannot leave a half-written entry behind
// (every write is a single insert), so poisoned guards are recovered.
impl ShipmentRepository for InMemoryShipmentRepository {
    fn save(&self, shipment: Shipment) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(shipment.tracking_id().clone(), shipment);
    }

    fn find_by_tracking_id(&self, tracking_id: &str) -> Option<Shipment> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(tracking_id).cloned()
    }

    fn find_all(&self) -> Vec<Shipment> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().cloned().collect()
    }
}
