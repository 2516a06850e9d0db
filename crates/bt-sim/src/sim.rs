//! The `Simulation` — a validated scenario plus the scheduler driving it.

use bt_core::SimTime;
use bt_engine::Scheduler;

use crate::{RunSummary, World};

/// A ready-to-run simulation.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    scheduler: Scheduler<World>,
    world: World,
}

impl Simulation {
    pub(crate) fn new(scheduler: Scheduler<World>, world: World) -> Self {
        Self { scheduler, world }
    }

    /// The virtual-time length of this run, from the vehicle parameters.
    pub fn horizon(&self) -> SimTime {
        SimTime::from_secs(self.world.params.horizon_secs)
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    /// Read access to the shared state, mainly for tests and probes.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Execute a single pending event.  Returns `false` once the event
    /// queue is empty.  [`run`][Self::run] is the normal entry point; this
    /// exists for incremental stepping in tests.
    pub fn step(&mut self) -> bool {
        self.scheduler.advance(&mut self.world)
    }

    /// Run to the horizon and drain all metrics into a [`RunSummary`].
    ///
    /// Consumes the simulation: processes still suspended at the horizon are
    /// discarded along with the scheduler, and the world's accumulated state
    /// moves into the summary.
    pub fn run(mut self) -> RunSummary {
        let horizon = self.horizon();
        self.scheduler.run_until(horizon, &mut self.world);
        RunSummary::drain(self.world)
    }
}
