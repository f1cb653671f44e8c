use std::io;

use anyhow::Context;

use shiptrack_cli::{ConsoleApp, demo};
use shiptrack_infra::{InMemoryShipmentRepository, TrackerConfig};
use shiptrack_service::ShippingService;
use shiptrack_shipments::StandardFeePolicy;

fn main() -> anyhow::Result<()> {
    let config = TrackerConfig::from_env().context("failed to load configuration")?;
    shiptrack_observability::init(&config.log);
    tracing::info!(seed_demo_data = config.seed_demo_data, "starting shipping tracker");

    let service = ShippingService::new(InMemoryShipmentRepository::new(), StandardFeePolicy);

    if config.seed_demo_data {
        let seeded = demo::seed(&service).context("failed to seed demo shipments")?;
        tracing::info!(count = seeded, "seeded demo shipments");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleApp::new(service, stdin.lock(), stdout.lock()).run()
}
