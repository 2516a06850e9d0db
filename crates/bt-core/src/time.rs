//! Virtual-time instants.
//!
//! # Design
//!
//! Simulation time is continuous: event timestamps come from exponential
//! interarrival draws and uniformly perturbed travel durations, so the
//! canonical time unit is an `f64` second count wrapped in [`SimTime`].
//! Virtual time has no connection to wall-clock time — it advances only when
//! the scheduler resumes the next pending process.
//!
//! `f64` has no total order, which rules it out as a priority-queue key on
//! its own.  [`SimTime::total_cmp`] exposes IEEE-754 `totalOrder` so queue
//! entries can implement `Ord` over it; the simulator never produces NaN
//! timestamps, but the ordering stays well-defined even if one slips in.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Seconds in one day, for time-of-day arithmetic.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// An absolute virtual-time instant, in seconds from simulation start.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Construct from a second count.
    #[inline]
    pub fn from_secs(secs: f64) -> SimTime {
        SimTime(secs)
    }

    /// Seconds elapsed since simulation start.
    #[inline]
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is
    /// actually later — callers compare first where that matters).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Position within the 24-hour day: `seconds mod 86 400`.
    #[inline]
    pub fn time_of_day(self) -> f64 {
        self.0.rem_euclid(SECONDS_PER_DAY)
    }

    /// IEEE-754 total ordering, for use as a priority-queue key.
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }
}

impl AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, secs: f64) {
        self.0 += secs;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}
