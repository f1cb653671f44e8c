//! Demo data for the console app.

use shiptrack_core::ShippingResult;
use shiptrack_infra::ShipmentRepository;
use shiptrack_service::{CreateShipment, ShippingService};
use shiptrack_shipments::{Address, FeePolicy, ShipmentType};

struct DemoShipment {
    kind: ShipmentType,
    tracking_id: &'static str,
    sender: &'static str,
    receiver: &'static str,
    from: (&'static str, &'static str),
    to: (&'static str, &'static str),
    weight_kg: f64,
}

const DEMO_SHIPMENTS: [DemoShipment; 3] = [
    DemoShipment {
        kind: ShipmentType::Standard,
        tracking_id: "T-1000",
        sender: "Alice",
        receiver: "Bob",
        from: ("Seoul", "Mapo-gu 1"),
        to: ("Busan", "Haeundae 2"),
        weight_kg: 2.5,
    },
    DemoShipment {
        kind: ShipmentType::Express,
        tracking_id: "T-2000",
        sender: "Chris",
        receiver: "Dana",
        from: ("Incheon", "Bupyeong 3"),
        to: ("Daegu", "Suseong 4"),
        weight_kg: 1.2,
    },
    DemoShipment {
        kind: ShipmentType::Fragile,
        tracking_id: "T-3000",
        sender: "Evan",
        receiver: "Frank",
        from: ("Daejeon", "Yuseong 5"),
        to: ("Gwangju", "Buk-gu 6"),
        weight_kg: 3.8,
    },
];

/// Create the three demo shipments. Returns how many were created.
pub fn seed<R, F>(service: &ShippingService<R, F>) -> ShippingResult<usize>
where
    R: ShipmentRepository,
    F: FeePolicy,
{
    for demo in &DEMO_SHIPMENTS {
        service.create_shipment(CreateShipment {
            kind: demo.kind,
            tracking_id: demo.tracking_id.to_string(),
            sender_name: demo.sender.to_string(),
            receiver_name: demo.receiver.to_string(),
            from: Address::new(demo.from.0, demo.from.1)?,
            to: Address::new(demo.to.0, demo.to.1)?,
            weight_kg: demo.weight_kg,
        })?;
    }
    Ok(DEMO_SHIPMENTS.len())
}
