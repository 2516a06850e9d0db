//! Scenario configuration: route descriptor, per-stop demand, fleet policy,
//! and vehicle parameters.
//!
//! All types derive `Serialize`/`Deserialize` so applications can load a
//! scenario from JSON or TOML; the simulator itself never touches files.
//! Validation is fail-fast: each type checks its own fields here, and the
//! simulation builder cross-checks references (demand entries against route
//! stops) before any event is generated.

use serde::{Deserialize, Serialize};

use bt_core::time::SECONDS_PER_DAY;

use crate::{ModelError, ModelResult};

// ── Route descriptor ──────────────────────────────────────────────────────────

/// One stop in a route descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStopSpec {
    pub stop_name: String,
    /// Nominal travel time to the next stop, in seconds.  The last entry's
    /// value is unused and may be omitted.
    pub travel_to_next_secs: Option<f64>,
}

/// Ordered list of stops a bus traverses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub stops: Vec<RouteStopSpec>,
}

impl RouteSpec {
    /// Check shape: non-empty, unique stop names, every non-terminal leg
    /// carrying a non-negative travel time.
    pub fn validate(&self) -> ModelResult<()> {
        if self.stops.is_empty() {
            return Err(ModelError::EmptyRoute);
        }
        for (i, spec) in self.stops.iter().enumerate() {
            if self.stops[..i].iter().any(|s| s.stop_name == spec.stop_name) {
                return Err(ModelError::DuplicateStop(spec.stop_name.clone()));
            }
            let terminal = i + 1 == self.stops.len();
            match spec.travel_to_next_secs {
                None if !terminal => {
                    return Err(ModelError::MissingTravelTime {
                        stop: spec.stop_name.clone(),
                    });
                }
                Some(t) if !terminal && !(t >= 0.0) => {
                    return Err(ModelError::NegativeTravelTime {
                        stop: spec.stop_name.clone(),
                        value: t,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ── Per-stop demand ───────────────────────────────────────────────────────────

/// Demand parameters for one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSpec {
    /// Poisson arrival rate, passengers per second.  Zero disables demand.
    pub arrival_rate: f64,
    /// Destination stop names passengers from here choose uniformly among.
    /// Must be empty only when the arrival rate is zero.
    pub destinations: Vec<String>,
}

impl DemandSpec {
    /// Field-level checks; cross-references against the route are the
    /// builder's job.
    pub fn validate(&self, stop: &str) -> ModelResult<()> {
        if !(self.arrival_rate >= 0.0) {
            return Err(ModelError::NegativeArrivalRate {
                stop: stop.to_owned(),
                rate: self.arrival_rate,
            });
        }
        if self.arrival_rate > 0.0 && self.destinations.is_empty() {
            return Err(ModelError::DemandWithoutDestinations {
                stop: stop.to_owned(),
                rate: self.arrival_rate,
            });
        }
        Ok(())
    }
}

// ── Fleet policy ──────────────────────────────────────────────────────────────

/// A time-of-day interval (seconds into the day, inclusive bounds) during
/// which the fleet policy may add extra buses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl PeakWindow {
    pub fn new(start_secs: f64, end_secs: f64) -> Self {
        Self { start_secs, end_secs }
    }

    /// `true` if `time_of_day` falls within the window (bounds inclusive).
    #[inline]
    pub fn contains(&self, time_of_day: f64) -> bool {
        self.start_secs <= time_of_day && time_of_day <= self.end_secs
    }

    pub fn validate(&self) -> ModelResult<()> {
        if !(self.start_secs >= 0.0) {
            return Err(ModelError::NegativeTime {
                param: "peak window start",
                value: self.start_secs,
            });
        }
        if self.end_secs < self.start_secs {
            return Err(ModelError::InvalidPeakWindow {
                start: self.start_secs,
                end: self.end_secs,
            });
        }
        Ok(())
    }
}

/// Dispatch cadence and time-of-day fleet scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetPolicy {
    /// Seconds between consecutive scheduled dispatches
    /// (`3600 / frequency_per_hour`).
    pub headway_secs: f64,
    pub peak_windows: Vec<PeakWindow>,
    /// Buses added on top of the scheduled one outside peak windows.
    pub extra_offpeak: u32,
    /// Buses added on top of the scheduled one inside peak windows.
    pub extra_peak: u32,
}

impl FleetPolicy {
    /// The base scenario: fixed headway, no extra buses at any hour.
    pub fn base(headway_secs: f64) -> Self {
        Self {
            headway_secs,
            peak_windows: Vec::new(),
            extra_offpeak: 0,
            extra_peak: 0,
        }
    }

    /// Headway for a service frequency given in buses per hour.
    pub fn headway_for_frequency(buses_per_hour: f64) -> f64 {
        3_600.0 / buses_per_hour
    }

    /// Whether `time_of_day` (seconds mod 86 400) falls in any peak window.
    pub fn is_peak(&self, time_of_day: f64) -> bool {
        debug_assert!((0.0..SECONDS_PER_DAY).contains(&time_of_day));
        self.peak_windows.iter().any(|w| w.contains(time_of_day))
    }

    /// Extra buses to dispatch alongside the scheduled one at this hour.
    pub fn extra_buses(&self, time_of_day: f64) -> u32 {
        if self.is_peak(time_of_day) {
            self.extra_peak
        } else {
            self.extra_offpeak
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if !(self.headway_secs > 0.0) {
            return Err(ModelError::NonPositiveHeadway(self.headway_secs));
        }
        for window in &self.peak_windows {
            window.validate()?;
        }
        Ok(())
    }
}

// ── Vehicle parameters ────────────────────────────────────────────────────────

/// Per-vehicle service parameters plus the run horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Seating capacity; the onboard set never exceeds it.
    pub capacity: u32,
    /// Serial per-passenger boarding duration, seconds.
    pub boarding_secs: f64,
    /// Serial per-passenger alighting duration, seconds.
    pub alighting_secs: f64,
    /// Fixed cost charged per late stop visit.  Zero disables fines.
    pub fine_cost: f64,
    /// Virtual-time length of the run, seconds.
    pub horizon_secs: f64,
}

impl VehicleParams {
    pub fn validate(&self) -> ModelResult<()> {
        if self.capacity == 0 {
            return Err(ModelError::NonPositiveCapacity);
        }
        for (param, value) in [
            ("boarding time", self.boarding_secs),
            ("alighting time", self.alighting_secs),
            ("simulation horizon", self.horizon_secs),
        ] {
            if !(value >= 0.0) {
                return Err(ModelError::NegativeTime { param, value });
            }
        }
        if !(self.fine_cost >= 0.0) {
            return Err(ModelError::NegativeFineCost(self.fine_cost));
        }
        Ok(())
    }
}
