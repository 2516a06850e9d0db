//! Per-stop passenger generation: a Poisson process feeding the waiting line.

use bt_engine::{EngineCtx, Poll, Process};
use bt_model::Passenger;
use bt_core::StopId;

use crate::World;

/// Seconds between demand re-checks at a stop that currently generates
/// nothing (zero rate or no reachable destinations).  Parameters are static
/// in the present model, so such a stop effectively idles for the whole run,
/// but the poll keeps the process alive should that ever change.
const IDLE_POLL_SECS: f64 = 1.0;

enum StopState {
    /// Nothing pending; the next resume decides what to wait for.
    Polling,
    /// An interarrival wait is elapsing; the next resume emits a passenger.
    WaitingInterarrival,
}

/// The arrival process for one stop.
///
/// While the stop has demand: draw `Exp(arrival_rate)`, suspend for that
/// long, then append a passenger with a uniformly chosen destination to the
/// stop's FIFO queue and repeat.  Without demand it idles on a fixed poll.
pub struct StopProcess {
    stop: StopId,
    state: StopState,
}

impl StopProcess {
    pub fn new(stop: StopId) -> Self {
        Self {
            stop,
            state: StopState::Polling,
        }
    }

    /// Create the passenger whose interarrival wait just elapsed.
    fn emit(&self, ctx: &mut EngineCtx<'_, World>) {
        let now = ctx.now();
        let id = ctx.world.mint_passenger_id();
        let World { rng, stops, .. } = &mut *ctx.world;
        let stop = &mut stops[self.stop.index()];
        // Demand can't have vanished between draw and emit (parameters are
        // static), so a destination always exists.
        if let Some(&destination) = rng.choose(&stop.destinations) {
            stop.push_arrival(Passenger::new(id, self.stop, destination, now));
        }
    }
}

impl Process<World> for StopProcess {
    fn resume(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        if matches!(self.state, StopState::WaitingInterarrival) {
            self.emit(ctx);
        }

        let rate = ctx.world.stops[self.stop.index()].arrival_rate;
        if ctx.world.stops[self.stop.index()].has_demand() {
            self.state = StopState::WaitingInterarrival;
            Poll::Sleep(ctx.world.rng.exp(rate))
        } else {
            self.state = StopState::Polling;
            Poll::Sleep(IDLE_POLL_SECS)
        }
    }
}
