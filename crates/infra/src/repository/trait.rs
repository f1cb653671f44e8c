use std::sync::Arc;

use shiptrack_shipments::Shipment;

/// Key/value store of shipments, keyed by tracking id.
///
/// ## Contract
///
/// - `save` inserts or overwrites the entry for `shipment.tracking_id()`.
///   It does **not** enforce uniqueness; that is the service's job.
/// - `find_by_tracking_id` returns `None` for an unknown (or empty) id.
/// - `find_all` returns an independent snapshot in unspecified order.
///
/// Implementations must be safe to share across threads. Reads and writes are
/// individually atomic; nothing here makes a read-then-write sequence atomic.
pub trait ShipmentRepository: Send + Sync {
    fn save(&self, shipment: Shipment);

    fn find_by_tracking_id(&self, tracking_id: &str) -> Option<Shipment>;

    fn find_all(&self) -> Vec<Shipment>;
}

impl<S> ShipmentRepository for Arc<S>
where
    S: ShipmentRepository + ?Sized,
{
    fn save(&self, shipment: Shipment) {
        (**self).save(shipment)
    }

    fn find_by_tracking_id(&self, tracking_id: &str) -> Option<Shipment> {
        (**self).find_by_tracking_id(tracking_id)
    }

    fn find_all(&self) -> Vec<Shipment> {
        (**self).find_all()
    }
}
