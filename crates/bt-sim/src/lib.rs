//! `bt-sim` — the simulation layer of the bus-transit simulator.
//!
//! Ties the pieces together: the [`World`] owns all shared mutable state
//! (stops, bus registry, random source, wait-time series), the three process
//! types drive it through the `bt-engine` scheduler, and [`SimBuilder`]
//! validates a scenario into a ready-to-run [`Simulation`].
//!
//! # Process roster
//!
//! | Process          | Cadence                              | Side effects            |
//! |------------------|--------------------------------------|-------------------------|
//! | [`StopProcess`]  | exponential interarrivals            | stop queue, counters    |
//! | [`BusProcess`]   | route traversal, per-passenger waits | queues, bus logs, fines |
//! | [`Dispatcher`]   | fixed headway                        | spawns bus processes    |
//!
//! All of them run on one thread under the engine's virtual clock; the whole
//! run is reproducible from the seed alone.

pub mod builder;
pub mod bus_process;
pub mod dispatcher;
pub mod error;
pub mod sim;
pub mod stop_process;
pub mod summary;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use bus_process::BusProcess;
pub use dispatcher::Dispatcher;
pub use error::{SimError, SimResult};
pub use sim::Simulation;
pub use stop_process::StopProcess;
pub use summary::{RunSummary, StopSummary};
pub use world::World;
