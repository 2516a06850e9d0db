//! `bt-output` — collaborator-side consumption of a finished run.
//!
//! The simulation core hands over flat event records and counters in a
//! [`RunSummary`](bt_sim::RunSummary); this crate turns them into files and
//! numbers people look at:
//!
//! - [`CsvExporter`] — one CSV per record stream, written at run end.
//! - [`report`] — pure aggregate statistics (mean/max wait, occupancy per
//!   stop, fines per stop) with a `Display` rendering for terminals.
//!
//! Nothing here feeds back into the simulation.

pub mod csv;
pub mod error;
pub mod report;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvExporter;
pub use error::{OutputError, OutputResult};
pub use report::{RunReport, wait_histogram};
