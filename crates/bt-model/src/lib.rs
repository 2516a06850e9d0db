//! `bt-model` — the bus-transit domain model.
//!
//! Pure data: passengers, stops, the route, buses and their event logs, the
//! flat records handed to collaborators, and the scenario configuration
//! types with their fail-fast validation.  No simulation behavior lives
//! here — `bt-sim` owns the processes that mutate these types.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`passenger`] | `Passenger` lifecycle record                          |
//! | [`stop`]    | `Stop` — FIFO waiting line + demand parameters          |
//! | [`route`]   | `Route`, `RouteLeg`                                     |
//! | [`bus`]     | `Bus` — onboard set, fine total, event logs             |
//! | [`records`] | Flat event records (occupancy, boarding, alighting, fine) |
//! | [`config`]  | `RouteSpec`, `DemandSpec`, `FleetPolicy`, `VehicleParams` |
//! | [`error`]   | `ModelError`, `ModelResult`                             |

pub mod bus;
pub mod config;
pub mod error;
pub mod passenger;
pub mod records;
pub mod route;
pub mod stop;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bus::Bus;
pub use config::{DemandSpec, FleetPolicy, PeakWindow, RouteSpec, RouteStopSpec, VehicleParams};
pub use error::{ModelError, ModelResult};
pub use passenger::Passenger;
pub use records::{AlightingRecord, BoardingRecord, FineRecord, OccupancyRecord};
pub use route::{Route, RouteLeg};
pub use stop::Stop;
