//! The `Stop` — a FIFO waiting line plus the demand parameters that feed it.

use std::collections::VecDeque;

use bt_core::{SimTime, StopId};

use crate::Passenger;

/// One stop along the route.
///
/// The queue is strictly FIFO: the stop's own arrival process appends at
/// the back, visiting buses pop from the front.  Because the event loop is
/// single-threaded and non-preemptive, no locking is needed.
#[derive(Debug)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    /// Passenger arrivals per second (Poisson rate). Zero means no demand.
    pub arrival_rate: f64,
    /// Stops a passenger generated here may be headed to.  Empty at the
    /// route terminal.
    pub destinations: Vec<StopId>,
    /// Waiting line, ordered by arrival time.
    pub queue: VecDeque<Passenger>,
    /// Passengers generated here over the whole run.
    pub generated: u64,
    /// Diagnostic counter bumped by the remaining queue length every time a
    /// full bus departs.  The same waiting passengers may be counted by
    /// several successive full buses, so this can exceed `generated`.
    pub unserved: u64,
}

impl Stop {
    pub fn new(id: StopId, name: String, arrival_rate: f64, destinations: Vec<StopId>) -> Self {
        Self {
            id,
            name,
            arrival_rate,
            destinations,
            queue: VecDeque::new(),
            generated: 0,
            unserved: 0,
        }
    }

    /// Whether this stop generates passengers at all.
    #[inline]
    pub fn has_demand(&self) -> bool {
        self.arrival_rate > 0.0 && !self.destinations.is_empty()
    }

    /// Append a freshly generated passenger to the waiting line.
    pub fn push_arrival(&mut self, passenger: Passenger) {
        debug_assert!(
            self.queue
                .back()
                .is_none_or(|last| last.arrival_time.total_cmp(&passenger.arrival_time).is_le()),
            "queue must stay ordered by arrival time"
        );
        self.queue.push_back(passenger);
        self.generated += 1;
    }

    /// Pop the head of the waiting line (oldest arrival), if any.
    pub fn pop_head(&mut self) -> Option<Passenger> {
        self.queue.pop_front()
    }

    /// Arrival time of the passenger at the head of the line.
    pub fn head_arrival(&self) -> Option<SimTime> {
        self.queue.front().map(|p| p.arrival_time)
    }
}
