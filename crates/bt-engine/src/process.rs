//! The `Process` trait and the context handed to each resumption.

use bt_core::SimTime;

/// What a resumed process asks the scheduler to do next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Poll {
    /// Suspend; resume this process again at `now + delay` seconds.
    /// The delay must be non-negative (zero is valid and means "re-run at
    /// this same instant, after everything already queued for it").
    Sleep(f64),
    /// The process has terminated.  Its state machine is dropped; any
    /// side effects live on in the world.
    Done,
}

/// A cooperative simulated process, generic over the world state `W` it
/// mutates.
///
/// Implementations are explicit state machines: each conceptual yield point
/// of the entity's procedure becomes one `resume` call that performs the
/// work since the previous wait, stores where to continue, and returns the
/// next wait.  The scheduler guarantees `resume` is never called
/// re-entrantly and that `ctx.now()` is monotonically non-decreasing across
/// calls.
pub trait Process<W> {
    fn resume(&mut self, ctx: &mut EngineCtx<'_, W>) -> Poll;
}

/// Execution context for one resumption: the current virtual time, mutable
/// access to the shared world, and the ability to spawn further processes.
pub struct EngineCtx<'a, W> {
    now: SimTime,
    pub world: &'a mut W,
    spawned: &'a mut Vec<(SimTime, Box<dyn Process<W>>)>,
}

impl<'a, W> EngineCtx<'a, W> {
    pub(crate) fn new(
        now: SimTime,
        world: &'a mut W,
        spawned: &'a mut Vec<(SimTime, Box<dyn Process<W>>)>,
    ) -> Self {
        Self { now, world, spawned }
    }

    /// The current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Register a new process whose first resumption happens at `at`.
    ///
    /// Spawns are queued in call order, before the spawning process's own
    /// re-entry, so processes spawned for the current instant run before
    /// their spawner resumes.
    pub fn spawn_at(&mut self, at: SimTime, process: Box<dyn Process<W>>) {
        debug_assert!(
            at.total_cmp(&self.now).is_ge(),
            "cannot spawn a process in the past ({at} < {})",
            self.now
        );
        self.spawned.push((at, process));
    }
}
