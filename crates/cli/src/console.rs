//! Interactive menu loop.

use std::io::{BufRead, Write};

use chrono::Utc;
use thiserror::Error;

use shiptrack_core::ShippingError;
use shiptrack_infra::ShipmentRepository;
use shiptrack_service::{CreateShipment, ShippingService};
use shiptrack_shipments::{Address, FeePolicy, ShipmentStatus, ShipmentType};

/// The input stream ended while the app was waiting for a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("input closed")]
pub struct InputClosed;

const RULE: &str = "===============================================";

/// Console UI over a [`ShippingService`].
///
/// Generic over its input and output so it can run against stdin/stdout or
/// scripted buffers.
pub struct ConsoleApp<R, F, I, O> {
    service: ShippingService<R, F>,
    input: I,
    output: O,
}

impl<R, F, I, O> ConsoleApp<R, F, I, O>
where
    R: ShipmentRepository,
    F: FeePolicy,
    I: BufRead,
    O: Write,
{
    pub fn new(service: ShippingService<R, F>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn service(&self) -> &ShippingService<R, F> {
        &self.service
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Run until `0` is selected or the input ends.
    ///
    /// Domain errors are printed and the loop continues. Any other error (an
    /// I/O failure on the streams) ends the loop and is returned.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_header()?;
            self.print_menu()?;

            let choice = match self.prompt("Select: ") {
                Ok(choice) => choice,
                Err(err) if err.is::<InputClosed>() => break,
                Err(err) => return Err(err),
            };

            if choice.trim() == "0" {
                break;
            }

            match self.handle(choice.trim()) {
                Ok(()) => {}
                Err(err) if err.is::<InputClosed>() => break,
                Err(err) => match err.downcast_ref::<ShippingError>() {
                    Some(domain) => {
                        tracing::debug!(kind = %domain.kind(), "command failed");
                        writeln!(self.output, "[ERROR] {domain}")?;
                    }
                    None => return Err(err),
                },
            }

            writeln!(self.output)?;
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Mini Shipping Tracker (CLI)")?;
        writeln!(self.output, "Now: {}", Utc::now())?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "1) Create shipment")?;
        writeln!(self.output, "2) List shipments")?;
        writeln!(self.output, "3) Track shipment")?;
        writeln!(self.output, "4) Update status")?;
        writeln!(self.output, "5) Calculate fee")?;
        writeln!(self.output, "0) Exit")?;
        Ok(())
    }

    fn handle(&mut self, choice: &str) -> anyhow::Result<()> {
        match choice {
            "1" => self.create_shipment(),
            "2" => self.list_shipments(),
            "3" => self.track_shipment(),
            "4" => self.update_status(),
            "5" => self.calculate_fee(),
            _ => {
                writeln!(self.output, "Unknown command.")?;
                Ok(())
            }
        }
    }

    fn create_shipment(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "---- Create Shipment ----")?;
        writeln!(self.output, "Type: 1) STANDARD 2) EXPRESS 3) FRAGILE")?;
        let kind = parse_type(&self.prompt("Type: ")?)?;

        let tracking_id = self.prompt("Tracking ID (e.g., T-1000): ")?;
        let sender_name = self.prompt("Sender name: ")?;
        let receiver_name = self.prompt("Receiver name: ")?;

        let sender_city = self.prompt("Sender city: ")?;
        let sender_line = self.prompt("Sender address line: ")?;
        let receiver_city = self.prompt("Receiver city: ")?;
        let receiver_line = self.prompt("Receiver address line: ")?;

        let weight_kg = parse_weight(&self.prompt("Weight (kg): ")?)?;

        let created = self.service.create_shipment(CreateShipment {
            kind,
            tracking_id,
            sender_name,
            receiver_name,
            from: Address::new(sender_city, sender_line)?,
            to: Address::new(receiver_city, receiver_line)?,
            weight_kg,
        })?;

        writeln!(self.output, "Created: {}", created.display_line())?;
        Ok(())
    }

    fn list_shipments(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "---- List ----")?;
        let all = self.service.list_all();
        if all.is_empty() {
            writeln!(self.output, "(empty)")?;
            return Ok(());
        }
        for shipment in &all {
            writeln!(self.output, "{}", shipment.display_line())?;
        }
        Ok(())
    }

    fn track_shipment(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "---- Track ----")?;
        let id = self.prompt("Tracking ID: ")?;

        let shipment = self.service.get_by_tracking_id(&id)?;
        writeln!(self.output, "{}", shipment.tracking_summary())?;

        writeln!(self.output, "---- Events ----")?;
        for event in shipment.events() {
            writeln!(self.output, "{}", event.display_line())?;
        }
        Ok(())
    }

    fn update_status(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "---- Update Status ----")?;
        let id = self.prompt("Tracking ID: ")?;

        writeln!(self.output, "Status: 1) CREATED 2) IN_TRANSIT 3) DELIVERED 4) LOST")?;
        let status = parse_status(&self.prompt("New status: ")?)?;

        self.service.update_status(&id, status)?;
        writeln!(self.output, "Updated.")?;
        Ok(())
    }

    fn calculate_fee(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "---- Calculate Fee ----")?;
        let id = self.prompt("Tracking ID: ")?;

        let fee = self.service.calculate_fee(&id)?;
        writeln!(self.output, "Fee: {fee:.2}")?;
        Ok(())
    }

    /// Print `label` and read one line, without its line terminator.
    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

fn parse_type(raw: &str) -> Result<ShipmentType, ShippingError> {
    match raw.trim() {
        "1" => Ok(ShipmentType::Standard),
        "2" => Ok(ShipmentType::Express),
        "3" => Ok(ShipmentType::Fragile),
        _ => Err(ShippingError::validation("Invalid type selection.")),
    }
}

fn parse_status(raw: &str) -> Result<ShipmentStatus, ShippingError> {
    match raw.trim() {
        "1" => Ok(ShipmentStatus::Created),
        "2" => Ok(ShipmentStatus::InTransit),
        "3" => Ok(ShipmentStatus::Delivered),
        "4" => Ok(ShipmentStatus::Lost),
        _ => Err(ShippingError::validation("Invalid status selection.")),
    }
}

fn parse_weight(raw: &str) -> Result<f64, ShippingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ShippingError::validation(format!("Not a valid number: {raw}")))
}
