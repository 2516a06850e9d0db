//! `bt-engine` — the discrete-event core of the bus-transit simulator.
//!
//! # Execution model
//!
//! The engine is a cooperative virtual-time scheduler.  Every simulated
//! entity (stop, bus, dispatcher) is a [`Process`]: an explicit resumable
//! state machine whose `resume` method runs until its next timed-wait point
//! and then returns [`Poll::Sleep`] with the wait duration, or [`Poll::Done`]
//! when it terminates.  The [`Scheduler`] keeps pending resumptions in a
//! time-ordered queue and executes strictly one process at a time:
//!
//! ```text
//! loop:
//!   ① pop the earliest (time, seq) entry — ties resolved by scheduling
//!     order, so same-instant resumptions fire strictly FIFO
//!   ② advance virtual time to that entry's time
//!   ③ resume the process; it mutates the world and asks to sleep or finish
//!   ④ queue any processes it spawned, then its own re-entry at now + delay
//! ```
//!
//! There is no real parallelism and no preemption: shared state (stop
//! queues, the random source) needs no locking because exactly one process
//! runs at any virtual instant.  Delays are virtual-time offsets, never
//! wall-clock waits.
//!
//! # Horizon semantics
//!
//! [`Scheduler::run_until`] stops consuming events once the next entry is at
//! or past the horizon.  Processes still suspended at that point are simply
//! never resumed; their partial state is dropped with the scheduler.  No
//! cancellation machinery exists because none is needed.

pub mod process;
pub mod queue;
pub mod scheduler;


pub use process::{EngineCtx, Poll, Process};
pub use scheduler::Scheduler;
