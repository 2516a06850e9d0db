//! Flat event records — the simulator's output contract.
//!
//! Collaborators (CSV export, statistics) consume these as-is; the core
//! never aggregates them.  Fields are primitives and owned strings so the
//! records serialize directly and stay decoupled from the in-memory model.

use serde::Serialize;

/// Occupancy snapshot, emitted once per stop visit after boarding finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyRecord {
    pub bus_id: u32,
    pub time_secs: f64,
    pub stop: String,
    /// Onboard count over capacity, as a percentage.
    pub occupancy_pct: f64,
    pub onboard: u32,
}

/// One passenger boarding a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardingRecord {
    pub bus_id: u32,
    pub time_secs: f64,
    pub stop: String,
    pub passenger_id: u32,
}

/// One passenger leaving a bus at their destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlightingRecord {
    pub bus_id: u32,
    pub time_secs: f64,
    pub stop: String,
    pub passenger_id: u32,
}

/// A schedule-adherence penalty: the bus reached `stop` later than its
/// running schedule allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FineRecord {
    pub bus_id: u32,
    pub stop: String,
    pub delay_secs: f64,
    pub cost: f64,
}
