//! Configuration-validation errors.
//!
//! All of these are construction-time failures: a scenario either validates
//! completely before the first event fires, or the run is rejected.  Runtime
//! conditions ("bus full", "no demand at this stop") are ordinary control
//! flow, never errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("bus capacity must be positive")]
    NonPositiveCapacity,

    #[error("route has no stops")]
    EmptyRoute,

    #[error("stop {0:?} appears more than once on the route")]
    DuplicateStop(String),

    #[error("stop {stop:?} is missing a travel time to the next stop")]
    MissingTravelTime { stop: String },

    #[error("stop {stop:?} has negative travel time {value} to the next stop")]
    NegativeTravelTime { stop: String, value: f64 },

    #[error("stop {stop:?} has negative arrival rate {rate}")]
    NegativeArrivalRate { stop: String, rate: f64 },

    #[error("stop {stop:?} has arrival rate {rate} but an empty destination set")]
    DemandWithoutDestinations { stop: String, rate: f64 },

    #[error("stop {stop:?} routes passengers to {destination:?}, which is not on the route")]
    UnknownDestination { stop: String, destination: String },

    #[error("route stop {0:?} has no demand entry")]
    MissingDemand(String),

    #[error("demand entry references stop {0:?}, which is not on the route")]
    UnknownStop(String),

    #[error("{param} must be non-negative, got {value}")]
    NegativeTime { param: &'static str, value: f64 },

    #[error("fine cost must be non-negative, got {0}")]
    NegativeFineCost(f64),

    #[error("dispatch headway must be positive, got {0}")]
    NonPositiveHeadway(f64),

    #[error("peak window ends at {end} before it starts at {start}")]
    InvalidPeakWindow { start: f64, end: f64 },
}

/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;
