//! The `Bus` — onboard passenger set, fine accounting, and event logs.

use bt_core::{BusId, SimTime, StopId};

use crate::{AlightingRecord, BoardingRecord, FineRecord, OccupancyRecord, Passenger};

/// One dispatched vehicle.
///
/// Owned by the world's bus registry; mutated only by its own bus process.
/// The event logs accumulate over the vehicle's traversal and are drained by
/// the metrics sink at run end.
#[derive(Debug)]
pub struct Bus {
    pub id: BusId,
    pub capacity: u32,
    pub dispatch_time: SimTime,
    /// Passengers currently riding.  Never exceeds `capacity`.
    pub onboard: Vec<Passenger>,
    /// Total fine cost accrued over the traversal.
    pub fines_total: f64,
    pub occupancy_log: Vec<OccupancyRecord>,
    pub boarding_log: Vec<BoardingRecord>,
    pub alighting_log: Vec<AlightingRecord>,
    pub fine_log: Vec<FineRecord>,
}

impl Bus {
    pub fn new(id: BusId, capacity: u32, dispatch_time: SimTime) -> Self {
        Self {
            id,
            capacity,
            dispatch_time,
            onboard: Vec::new(),
            fines_total: 0.0,
            occupancy_log: Vec::new(),
            boarding_log: Vec::new(),
            alighting_log: Vec::new(),
            fine_log: Vec::new(),
        }
    }

    /// `true` once the onboard set has reached capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.onboard.len() >= self.capacity as usize
    }

    /// Onboard count over capacity, as a percentage.
    #[inline]
    pub fn occupancy_pct(&self) -> f64 {
        self.onboard.len() as f64 / self.capacity as f64 * 100.0
    }

    /// Take a passenger onboard and log the boarding event.
    pub fn board(&mut self, passenger: Passenger, now: SimTime, stop: &str) {
        debug_assert!(!self.is_full(), "{} boarded past capacity", self.id);
        self.boarding_log.push(BoardingRecord {
            bus_id: self.id.0,
            time_secs: now.seconds(),
            stop: stop.to_owned(),
            passenger_id: passenger.id.0,
        });
        self.onboard.push(passenger);
    }

    /// Remove the first onboard passenger bound for `destination` and log
    /// the alighting event.  Returns `None` when nobody wants off here.
    pub fn alight_one(
        &mut self,
        destination: StopId,
        now: SimTime,
        stop: &str,
    ) -> Option<Passenger> {
        let pos = self.onboard.iter().position(|p| p.destination == destination)?;
        let passenger = self.onboard.remove(pos);
        self.alighting_log.push(AlightingRecord {
            bus_id: self.id.0,
            time_secs: now.seconds(),
            stop: stop.to_owned(),
            passenger_id: passenger.id.0,
        });
        Some(passenger)
    }

    /// How many onboard passengers are bound for `destination`.
    pub fn headed_to(&self, destination: StopId) -> usize {
        self.onboard.iter().filter(|p| p.destination == destination).count()
    }

    /// Accrue one fixed-cost fine for arriving `delay_secs` late at `stop`.
    pub fn record_fine(&mut self, stop: &str, delay_secs: f64, cost: f64) {
        self.fines_total += cost;
        self.fine_log.push(FineRecord {
            bus_id: self.id.0,
            stop: stop.to_owned(),
            delay_secs,
            cost,
        });
    }

    /// Log an occupancy snapshot at the current instant.
    pub fn record_occupancy(&mut self, now: SimTime, stop: &str) {
        self.occupancy_log.push(OccupancyRecord {
            bus_id: self.id.0,
            time_secs: now.seconds(),
            stop: stop.to_owned(),
            occupancy_pct: self.occupancy_pct(),
            onboard: self.onboard.len() as u32,
        });
    }
}
