//! Black-box tests of the shipping use cases through the public API only.

use std::sync::Arc;
use std::thread;

use shiptrack_core::{ShippingError, ShippingErrorKind};
use shiptrack_infra::{InMemoryShipmentRepository, ShipmentRepository};
use shiptrack_service::{CreateShipment, ShippingService};
use shiptrack_shipments::{Address, FeePolicy, ShipmentStatus, ShipmentType, StandardFeePolicy};

fn create_cmd(kind: ShipmentType, tracking_id: &str, weight_kg: f64) -> CreateShipment {
    CreateShipment {
        kind,
        tracking_id: tracking_id.to_string(),
        sender_name: "Evan".to_string(),
        receiver_name: "Frank".to_string(),
        from: Address::new("Daejeon", "Yuseong 5").unwrap(),
        to: Address::new("Gwangju", "Buk-gu 6").unwrap(),
        weight_kg,
    }
}

#[test]
fn full_lifecycle_created_to_in_transit_to_delivered() {
    let service = ShippingService::new(InMemoryShipmentRepository::new(), StandardFeePolicy);
    service
        .create_shipment(create_cmd(ShipmentType::Fragile, "T-3000", 3.8))
        .unwrap();

    service.update_status("T-3000", ShipmentStatus::InTransit).unwrap();
    service.update_status("T-3000", ShipmentStatus::Delivered).unwrap();

    let shipment = service.get_by_tracking_id("T-3000").unwrap();
    assert_eq!(shipment.status(), ShipmentStatus::Delivered);

    let history: Vec<(ShipmentStatus, &str)> = shipment
        .events()
        .iter()
        .map(|e| (e.status(), e.note()))
        .collect();
    assert_eq!(
        history,
        vec![
            (ShipmentStatus::Created, "Created"),
            (ShipmentStatus::InTransit, "Status changed to IN_TRANSIT"),
            (ShipmentStatus::Delivered, "Status changed to DELIVERED"),
        ]
    );

    let times: Vec<_> = shipment.events().iter().map(|e| e.time()).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));

    let err = service.update_status("T-3000", ShipmentStatus::Lost).unwrap_err();
    assert_eq!(err.kind(), ShippingErrorKind::InvalidState);
}

#[test]
fn returned_shipment_is_a_copy_of_the_stored_one() {
    let service = ShippingService::new(InMemoryShipmentRepository::new(), StandardFeePolicy);
    let created = service
        .create_shipment(create_cmd(ShipmentType::Standard, "T-1", 1.0))
        .unwrap();

    service.update_status("T-1", ShipmentStatus::InTransit).unwrap();

    assert_eq!(created.status(), ShipmentStatus::Created);
    assert_eq!(created.events().len(), 1);
    assert_eq!(
        service.get_by_tracking_id("T-1").unwrap().status(),
        ShipmentStatus::InTransit
    );
}

#[test]
fn collaborators_can_be_shared_trait_objects() {
    let repository: Arc<dyn ShipmentRepository> = Arc::new(InMemoryShipmentRepository::new());
    let policy: Arc<dyn FeePolicy> = Arc::new(StandardFeePolicy);
    let service = ShippingService::new(Arc::clone(&repository), policy);

    service
        .create_shipment(create_cmd(ShipmentType::Express, "T-2000", 1.2))
        .unwrap();

    assert!(repository.find_by_tracking_id("T-2000").is_some());
    let fee = service.calculate_fee("T-2000").unwrap();
    assert!((fee - (6.50 + 1.2 * 1.20) * 1.10).abs() < 1e-9);
}

#[test]
fn domain_errors_are_one_matchable_category() {
    let service = ShippingService::new(InMemoryShipmentRepository::new(), StandardFeePolicy);

    let failures: Vec<ShippingError> = vec![
        service.get_by_tracking_id("missing").unwrap_err(),
        service
            .create_shipment(create_cmd(ShipmentType::Standard, "", 1.0))
            .unwrap_err(),
        {
            service
                .create_shipment(create_cmd(ShipmentType::Standard, "T-9", 1.0))
                .unwrap();
            service
                .update_status("T-9", ShipmentStatus::Delivered)
                .unwrap_err()
        },
    ];

    let kinds: Vec<ShippingErrorKind> = failures.iter().map(ShippingError::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShippingErrorKind::NotFound,
            ShippingErrorKind::Validation,
            ShippingErrorKind::InvalidState,
        ]
    );
}

#[test]
fn concurrent_callers_on_distinct_ids_do_not_interfere() {
    let service = Arc::new(ShippingService::new(
        InMemoryShipmentRepository::new(),
        StandardFeePolicy,
    ));

    thread::scope(|scope| {
        for worker in 0..8 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                let id = format!("T-{worker:02}");
                service
                    .create_shipment(create_cmd(ShipmentType::Standard, &id, 1.0))
                    .unwrap();
                service.update_status(&id, ShipmentStatus::InTransit).unwrap();
                service.update_status(&id, ShipmentStatus::Delivered).unwrap();
            });
        }
    });

    let all = service.list_all();
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|s| s.status() == ShipmentStatus::Delivered));
    assert!(all.iter().all(|s| s.events().len() == 3));
    assert_eq!(all[0].tracking_id().as_str(), "T-00");
    assert_eq!(all[7].tracking_id().as_str(), "T-07");
}
