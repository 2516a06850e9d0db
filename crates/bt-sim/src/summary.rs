//! The metrics sink: end-of-run draining of bus logs and counters.

use serde::Serialize;

use crate::World;
use bt_model::{AlightingRecord, BoardingRecord, FineRecord, OccupancyRecord};

/// End-of-run counters for one stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSummary {
    pub name: String,
    /// Passengers generated at this stop over the run.
    pub generated: u64,
    /// Diagnostic unserved counter — bumped by the remaining queue length on
    /// every full-bus departure, so successive full buses may count the same
    /// passengers repeatedly.  Not part of the conservation identity.
    pub unserved: u64,
    /// Passengers still queued when the horizon ended.  Satisfies
    /// `generated = boarded + left_waiting` per stop.
    pub left_waiting: u64,
}

/// Everything a run produced, drained from the world at completion.
///
/// This is a passive accumulator: records appear in a deterministic order
/// (bus-id order, each bus's log in emission order) and no aggregation
/// happens here.  Averages, histograms, and file export belong to
/// collaborators such as `bt-output`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub occupancy: Vec<OccupancyRecord>,
    pub boardings: Vec<BoardingRecord>,
    pub alightings: Vec<AlightingRecord>,
    pub fines: Vec<FineRecord>,
    /// Run-wide wait-time series, seconds, in boarding order.
    pub wait_times: Vec<f64>,
    pub stops: Vec<StopSummary>,
    pub buses_dispatched: u64,
    pub total_fine_cost: f64,
}

impl RunSummary {
    /// Drain the world's per-bus logs and per-stop counters.
    pub(crate) fn drain(world: World) -> Self {
        let mut summary = RunSummary {
            occupancy: Vec::new(),
            boardings: Vec::new(),
            alightings: Vec::new(),
            fines: Vec::new(),
            wait_times: world.wait_times,
            stops: Vec::new(),
            buses_dispatched: world.buses.len() as u64,
            total_fine_cost: 0.0,
        };

        for bus in world.buses {
            summary.occupancy.extend(bus.occupancy_log);
            summary.boardings.extend(bus.boarding_log);
            summary.alightings.extend(bus.alighting_log);
            summary.fines.extend(bus.fine_log);
            summary.total_fine_cost += bus.fines_total;
        }

        for stop in world.stops {
            summary.stops.push(StopSummary {
                name: stop.name,
                generated: stop.generated,
                unserved: stop.unserved,
                left_waiting: stop.queue.len() as u64,
            });
        }

        summary
    }

    /// Boardings that happened at the named stop.
    pub fn boardings_at(&self, stop: &str) -> usize {
        self.boardings.iter().filter(|b| b.stop == stop).count()
    }
}
