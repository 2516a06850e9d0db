//! The `Scheduler` — owns the event queue and drives process resumptions.

use bt_core::SimTime;

use crate::process::{EngineCtx, Poll, Process};
use crate::queue::EventQueue;

/// Cooperative virtual-time scheduler, generic over the world state `W`
/// shared by all processes.
///
/// The world itself is *not* owned here — it is passed into [`advance`] and
/// [`run_until`] by the simulation layer, which keeps the engine free of any
/// domain knowledge.
///
/// [`advance`]: Scheduler::advance
/// [`run_until`]: Scheduler::run_until
pub struct Scheduler<W> {
    queue: EventQueue<W>,
    now: SimTime,
    /// Reusable buffer for processes spawned during a resumption.
    spawn_buf: Vec<(SimTime, Box<dyn Process<W>>)>,
}

impl<W> Default for Scheduler<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Scheduler<W> {
    pub fn new() -> Self {
        Self {
            queue: EventQueue::default(),
            now: SimTime::ZERO,
            spawn_buf: Vec::new(),
        }
    }

    /// The current virtual time.  Starts at zero and only moves forward.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of pending resumptions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.len() == 0
    }

    /// Register a process from outside the event loop (initial setup).
    /// First resumption happens at `at`, which must not lie in the past.
    pub fn spawn_at(&mut self, at: SimTime, process: Box<dyn Process<W>>) {
        debug_assert!(
            at.total_cmp(&self.now).is_ge(),
            "cannot spawn a process in the past ({at} < {})",
            self.now
        );
        self.queue.push(at, process);
    }

    /// Pop the earliest pending entry, advance virtual time to it, and
    /// resume exactly that process.  Returns `false` when the queue is
    /// empty and nothing ran.
    pub fn advance(&mut self, world: &mut W) -> bool {
        let Some(mut entry) = self.queue.pop() else {
            return false;
        };
        self.now = entry.time;

        let poll = {
            let mut ctx = EngineCtx::new(self.now, world, &mut self.spawn_buf);
            entry.process.resume(&mut ctx)
        };

        // Spawns queue before the resumed process's own re-entry so that a
        // dispatcher's same-instant children run before the dispatcher does.
        for (at, process) in self.spawn_buf.drain(..) {
            self.queue.push(at, process);
        }

        match poll {
            Poll::Sleep(delay) => {
                debug_assert!(delay >= 0.0, "negative sleep of {delay}s");
                self.queue.push(self.now + delay.max(0.0), entry.process);
            }
            Poll::Done => {} // state machine dropped here
        }
        true
    }

    /// Repeat [`advance`] until the queue is empty or the next entry is due
    /// at or past `horizon`.  Entries past the horizon stay unconsumed and
    /// are discarded with the scheduler; the clock finishes clamped to the
    /// horizon, matching the run's nominal length.
    ///
    /// [`advance`]: Scheduler::advance
    pub fn run_until(&mut self, horizon: SimTime, world: &mut W) {
        while let Some(next) = self.queue.peek_time() {
            if next.total_cmp(&horizon).is_ge() {
                break;
            }
            self.advance(world);
        }
        if horizon.total_cmp(&self.now).is_gt() {
            self.now = horizon;
        }
    }
}
