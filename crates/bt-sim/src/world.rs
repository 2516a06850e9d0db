//! The `World` — the explicit simulation-context object.
//!
//! Everything the processes share lives here: the run's random source, the
//! stops with their queues, the bus registry, the route, the scenario
//! parameters, and the run-wide wait-time series.  There is no ambient
//! global state anywhere in the simulator, which is what makes parallel
//! *test* runs safe even though a single run is strictly single-threaded.

use bt_core::{BusId, PassengerId, SimRng, SimTime};
use bt_model::{Bus, FleetPolicy, Route, Stop, VehicleParams};

/// Shared mutable state for one simulation run.
pub struct World {
    /// The run's only random source.  Injected into processes by `&mut`
    /// reference; never global.
    pub rng: SimRng,

    /// Stops in route order, indexed by `StopId`.
    pub stops: Vec<Stop>,

    /// Every bus ever dispatched, indexed by `BusId`.  Buses are appended by
    /// the dispatcher and mutated only by their own bus process; the metrics
    /// sink drains their logs at run end.
    pub buses: Vec<Bus>,

    /// The single route all buses traverse.
    pub route: Route,

    pub params: VehicleParams,
    pub policy: FleetPolicy,

    /// Seconds each served passenger waited, in boarding order across the
    /// whole run.
    pub wait_times: Vec<f64>,

    next_passenger: u32,
}

impl World {
    pub(crate) fn new(
        seed: u64,
        stops: Vec<Stop>,
        route: Route,
        params: VehicleParams,
        policy: FleetPolicy,
    ) -> Self {
        Self {
            rng: SimRng::new(seed),
            stops,
            buses: Vec::new(),
            route,
            params,
            policy,
            wait_times: Vec::new(),
            next_passenger: 0,
        }
    }

    /// Mint the next run-wide passenger sequence number.
    pub fn mint_passenger_id(&mut self) -> PassengerId {
        let id = PassengerId(self.next_passenger);
        self.next_passenger += 1;
        id
    }

    /// Register a new bus dispatched at `dispatch_time` and return its id.
    /// Ids are strictly increasing in registration order.
    pub fn register_bus(&mut self, dispatch_time: SimTime) -> BusId {
        let id = BusId(self.buses.len() as u32);
        self.buses.push(Bus::new(id, self.params.capacity, dispatch_time));
        id
    }
}
