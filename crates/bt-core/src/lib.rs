//! `bt-core` — foundational types for the bus-transit simulator.
//!
//! This crate is a dependency of every other `bt-*` crate.  It intentionally
//! has no `bt-*` dependencies and minimal external ones (only `rand` and
//! `rand_distr`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `BusId`, `StopId`, `PassengerId`           |
//! | [`time`] | `SimTime` — virtual-time instants          |
//! | [`rng`]  | `SimRng` — the run's seeded random source  |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{BusId, PassengerId, StopId};
pub use rng::SimRng;
pub use time::SimTime;
