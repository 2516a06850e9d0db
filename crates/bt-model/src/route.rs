//! The route a bus traverses: an ordered stop sequence with inter-stop
//! travel times.

use bt_core::StopId;

/// One position on the route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub stop: StopId,
    /// Nominal (undelayed) travel time to the next stop, in seconds.
    /// `None` marks the terminal stop.
    pub travel_to_next: Option<f64>,
}

/// The validated route: stops in traversal order, terminal leg last.
/// A run models exactly one route, shared read-only by every bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}
