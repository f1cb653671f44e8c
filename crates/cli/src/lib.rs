//! Console front end for the shipping tracker.
//!
//! Thin glue only: prompts, parses menu selections into domain values and
//! prints results. All rules live in `shiptrack-service`.

pub mod console;
pub mod demo;

pub use console::{ConsoleApp, InputClosed};
