//! The `Passenger` lifecycle record.

use bt_core::{PassengerId, SimTime, StopId};

/// One generated passenger.
///
/// Created by a stop's arrival process, mutated exactly once — the boarding
/// instant — when a bus picks it up, and inert after alighting.  A passenger
/// still queued when the horizon ends simply never boards; nothing destroys
/// it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: StopId,
    pub destination: StopId,
    /// When the passenger joined the stop's waiting line.
    pub arrival_time: SimTime,
    /// Set at pickup; `None` while still waiting.
    pub boarding_time: Option<SimTime>,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: StopId, destination: StopId, arrival_time: SimTime) -> Self {
        Self {
            id,
            origin,
            destination,
            arrival_time,
            boarding_time: None,
        }
    }

    /// Mark the passenger as boarded at `at` and return the wait endured.
    ///
    /// A passenger boards at most one bus; calling this twice is a logic
    /// error in the caller.
    pub fn board(&mut self, at: SimTime) -> f64 {
        debug_assert!(self.boarding_time.is_none(), "{} boarded twice", self.id);
        debug_assert!(
            at.total_cmp(&self.arrival_time).is_ge(),
            "{} boards before arriving",
            self.id
        );
        self.boarding_time = Some(at);
        at.since(self.arrival_time)
    }
}
