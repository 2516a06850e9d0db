//! Bus route traversal: schedule check, alighting, capacity-constrained
//! FCFS boarding, and stochastic travel.

use bt_core::{BusId, SimTime, StopId};
use bt_engine::{EngineCtx, Poll, Process};
use bt_model::Passenger;

use crate::World;

/// Multiplicative travel-time jitter bounds: `nominal × uniform(0.8, 1.2)`.
const TRAVEL_JITTER_LO: f64 = 0.8;
const TRAVEL_JITTER_HI: f64 = 1.2;
/// Probability of an independent extra delay on any leg.
const EXTRA_DELAY_PROB: f64 = 0.1;
/// Mean of the exponential extra delay, seconds.
const EXTRA_DELAY_MEAN_SECS: f64 = 60.0;

enum BusState {
    /// Created ahead of its departure; sleeping until dispatch time.
    AwaitingDeparture,
    /// A travel leg (or the initial departure) just completed; the bus is at
    /// `leg` and must run the arrival sequence.
    AtStop,
    /// One passenger's alighting duration just elapsed; they step off now.
    Alighting,
    /// One passenger's boarding duration just elapsed; they step on now.
    /// The passenger was already popped from the queue (and their wait
    /// recorded) when the duration started.
    Boarding { pending: Passenger },
}

/// The traversal state machine for one dispatched bus.
///
/// Per stop, in order: schedule check (fine if later than the running
/// scheduled time), serial alighting, serial FCFS boarding up to capacity,
/// occupancy snapshot, then travel to the next leg.  The travel suspension
/// itself is the "traveling" state: the process re-enters as `AtStop` on the
/// next leg when it elapses.  At the terminal stop the process ends.
pub struct BusProcess {
    bus: BusId,
    /// Index into `world.route.legs` of the stop being serviced (or traveled
    /// toward).
    leg: usize,
    /// Running schedule baseline.  Starts at the dispatch time and advances
    /// by the *nominal* inter-stop time only — never by actual delay — so a
    /// single upstream delay keeps fining every later stop.
    scheduled_time: SimTime,
    state: BusState,
}

impl BusProcess {
    pub fn new(bus: BusId, dispatch_time: SimTime) -> Self {
        Self {
            bus,
            leg: 0,
            scheduled_time: dispatch_time,
            state: BusState::AwaitingDeparture,
        }
    }

    fn current_stop(&self, world: &World) -> StopId {
        world.route.legs[self.leg].stop
    }

    /// Arrival sequence at the current leg: schedule check, then the
    /// alighting chain (or straight to boarding when nobody steps off).
    fn arrive(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        let now = ctx.now();
        let stop_id = self.current_stop(ctx.world);
        {
            let World { stops, buses, params, .. } = &mut *ctx.world;
            let bus = &mut buses[self.bus.index()];

            if now.total_cmp(&self.scheduled_time).is_gt() {
                let delay = now.since(self.scheduled_time);
                bus.record_fine(&stops[stop_id.index()].name, delay, params.fine_cost);
            }

            if bus.headed_to(stop_id) > 0 {
                self.state = BusState::Alighting;
                return Poll::Sleep(params.alighting_secs);
            }
        }
        self.begin_boarding(ctx)
    }

    /// Try to start boarding the head of the queue; otherwise close out the
    /// stop visit.  Wait time is measured at this pop instant, before the
    /// boarding duration elapses.
    fn begin_boarding(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        let now = ctx.now();
        let stop_id = self.current_stop(ctx.world);
        {
            let World { stops, buses, params, wait_times, .. } = &mut *ctx.world;
            let stop = &mut stops[stop_id.index()];
            let bus = &mut buses[self.bus.index()];

            if !bus.is_full() {
                if let Some(mut passenger) = stop.pop_head() {
                    let wait = passenger.board(now);
                    wait_times.push(wait);
                    self.state = BusState::Boarding { pending: passenger };
                    return Poll::Sleep(params.boarding_secs);
                }
            }

            if !stop.queue.is_empty() {
                // Full bus leaves demand behind.  Every passenger still in
                // line is counted, and the next full bus will count them
                // again — see the unserved-counter note in DESIGN.md.
                stop.unserved += stop.queue.len() as u64;
            }
        }
        self.depart(ctx)
    }

    /// Close out the stop visit: occupancy snapshot, then either travel to
    /// the next leg or terminate at the route's end.
    fn depart(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        let now = ctx.now();
        let stop_id = self.current_stop(ctx.world);
        let World { rng, stops, buses, route, .. } = &mut *ctx.world;
        let bus = &mut buses[self.bus.index()];

        bus.record_occupancy(now, &stops[stop_id.index()].name);

        let Some(nominal) = route.legs[self.leg].travel_to_next else {
            return Poll::Done; // terminal stop
        };

        let mut travel = nominal * rng.uniform(TRAVEL_JITTER_LO, TRAVEL_JITTER_HI);
        if rng.chance(EXTRA_DELAY_PROB) {
            travel += rng.exp(1.0 / EXTRA_DELAY_MEAN_SECS);
        }

        // Nominal advance only: incurred delay is never forgiven.
        self.scheduled_time += nominal;
        self.leg += 1;
        self.state = BusState::AtStop;
        Poll::Sleep(travel)
    }
}

impl Process<World> for BusProcess {
    fn resume(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        match std::mem::replace(&mut self.state, BusState::AtStop) {
            BusState::AwaitingDeparture => {
                let remaining = self.scheduled_time.since(ctx.now());
                if remaining > 0.0 {
                    self.state = BusState::AwaitingDeparture;
                    Poll::Sleep(remaining)
                } else {
                    self.arrive(ctx)
                }
            }

            BusState::AtStop => self.arrive(ctx),

            BusState::Alighting => {
                let now = ctx.now();
                let stop_id = self.current_stop(ctx.world);
                {
                    let World { stops, buses, params, .. } = &mut *ctx.world;
                    let stop_name = &stops[stop_id.index()].name;
                    let bus = &mut buses[self.bus.index()];
                    let _ = bus.alight_one(stop_id, now, stop_name);
                    if bus.headed_to(stop_id) > 0 {
                        self.state = BusState::Alighting;
                        return Poll::Sleep(params.alighting_secs);
                    }
                }
                self.begin_boarding(ctx)
            }

            BusState::Boarding { pending } => {
                let stop_id = self.current_stop(ctx.world);
                let now = ctx.now();
                {
                    let World { stops, buses, .. } = &mut *ctx.world;
                    let stop_name = &stops[stop_id.index()].name;
                    buses[self.bus.index()].board(pending, now, stop_name);
                }
                self.begin_boarding(ctx)
            }
        }
    }
}
