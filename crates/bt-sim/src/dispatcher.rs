//! Fixed-headway bus dispatch with time-of-day fleet scaling.

use bt_engine::{EngineCtx, Poll, Process};

use crate::{BusProcess, World};

/// Spawns bus processes at every headway tick.
///
/// Each tick dispatches `1 + policy.extra_buses(time_of_day)` buses, all
/// sharing the tick as their dispatch time, with strictly increasing ids.
/// The process never terminates on its own — the horizon simply stops
/// resuming it.
pub struct Dispatcher;

impl Process<World> for Dispatcher {
    fn resume(&mut self, ctx: &mut EngineCtx<'_, World>) -> Poll {
        let now = ctx.now();
        let fleet = 1 + ctx.world.policy.extra_buses(now.time_of_day());
        for _ in 0..fleet {
            let id = ctx.world.register_bus(now);
            ctx.spawn_at(now, Box::new(BusProcess::new(id, now)));
        }
        Poll::Sleep(ctx.world.policy.headway_secs)
    }
}
