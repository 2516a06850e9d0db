//! Unit tests for the domain model and configuration validation.

#[cfg(test)]
mod passenger {
    use bt_core::{PassengerId, SimTime, StopId};

    use crate::Passenger;

    #[test]
    fn board_sets_time_and_returns_wait() {
        let mut p = Passenger::new(
            PassengerId(0),
            StopId(0),
            StopId(3),
            SimTime::from_secs(30.0),
        );
        assert_eq!(p.boarding_time, None);
        let wait = p.board(SimTime::from_secs(95.0));
        assert_eq!(wait, 65.0);
        assert_eq!(p.boarding_time, Some(SimTime::from_secs(95.0)));
    }
}

#[cfg(test)]
mod stop {
    use bt_core::{PassengerId, SimTime, StopId};

    use crate::{Passenger, Stop};

    fn passenger(n: u32, at: f64) -> Passenger {
        Passenger::new(PassengerId(n), StopId(0), StopId(1), SimTime::from_secs(at))
    }

    #[test]
    fn queue_is_fifo() {
        let mut stop = Stop::new(StopId(0), "A".into(), 0.01, vec![StopId(1)]);
        stop.push_arrival(passenger(0, 1.0));
        stop.push_arrival(passenger(1, 2.0));
        stop.push_arrival(passenger(2, 3.0));
        assert_eq!(stop.generated, 3);
        assert_eq!(stop.pop_head().unwrap().id, PassengerId(0));
        assert_eq!(stop.pop_head().unwrap().id, PassengerId(1));
        assert_eq!(stop.head_arrival(), Some(SimTime::from_secs(3.0)));
    }

    #[test]
    fn demand_requires_rate_and_destinations() {
        let with_demand = Stop::new(StopId(0), "A".into(), 0.5, vec![StopId(1)]);
        assert!(with_demand.has_demand());
        let no_rate = Stop::new(StopId(0), "A".into(), 0.0, vec![StopId(1)]);
        assert!(!no_rate.has_demand());
        let no_dests = Stop::new(StopId(0), "A".into(), 0.0, vec![]);
        assert!(!no_dests.has_demand());
    }
}

#[cfg(test)]
mod bus {
    use bt_core::{BusId, PassengerId, SimTime, StopId};

    use crate::{Bus, Passenger};

    fn passenger(n: u32, dest: u32) -> Passenger {
        Passenger::new(PassengerId(n), StopId(0), StopId(dest), SimTime::ZERO)
    }

    #[test]
    fn board_logs_and_fills() {
        let mut bus = Bus::new(BusId(0), 2, SimTime::ZERO);
        assert!(!bus.is_full());
        bus.board(passenger(0, 1), SimTime::from_secs(5.0), "A");
        bus.board(passenger(1, 1), SimTime::from_secs(7.0), "A");
        assert!(bus.is_full());
        assert_eq!(bus.occupancy_pct(), 100.0);
        assert_eq!(bus.boarding_log.len(), 2);
        assert_eq!(bus.boarding_log[0].passenger_id, 0);
        assert_eq!(bus.boarding_log[1].time_secs, 7.0);
    }

    #[test]
    fn alight_removes_only_matching_destination() {
        let mut bus = Bus::new(BusId(0), 10, SimTime::ZERO);
        bus.board(passenger(0, 2), SimTime::ZERO, "A");
        bus.board(passenger(1, 3), SimTime::ZERO, "A");
        bus.board(passenger(2, 2), SimTime::ZERO, "A");

        assert_eq!(bus.headed_to(StopId(2)), 2);
        let off = bus.alight_one(StopId(2), SimTime::from_secs(10.0), "C").unwrap();
        assert_eq!(off.id, PassengerId(0)); // earliest boarded first
        assert_eq!(bus.onboard.len(), 2);
        assert!(bus.alight_one(StopId(9), SimTime::ZERO, "X").is_none());
        assert_eq!(bus.alighting_log.len(), 1);
    }

    #[test]
    fn fines_accumulate() {
        let mut bus = Bus::new(BusId(3), 10, SimTime::ZERO);
        bus.record_fine("B", 42.0, 1_000.0);
        bus.record_fine("C", 7.0, 1_000.0);
        assert_eq!(bus.fines_total, 2_000.0);
        assert_eq!(bus.fine_log[0].delay_secs, 42.0);
        assert_eq!(bus.fine_log[1].stop, "C");
    }

    #[test]
    fn occupancy_snapshot() {
        let mut bus = Bus::new(BusId(0), 4, SimTime::ZERO);
        bus.board(passenger(0, 1), SimTime::ZERO, "A");
        bus.record_occupancy(SimTime::from_secs(12.0), "A");
        let snap = &bus.occupancy_log[0];
        assert_eq!(snap.occupancy_pct, 25.0);
        assert_eq!(snap.onboard, 1);
        assert_eq!(snap.time_secs, 12.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{
        DemandSpec, FleetPolicy, ModelError, PeakWindow, RouteSpec, RouteStopSpec, VehicleParams,
    };

    fn leg(name: &str, t: Option<f64>) -> RouteStopSpec {
        RouteStopSpec {
            stop_name: name.into(),
            travel_to_next_secs: t,
        }
    }

    #[test]
    fn valid_route_passes() {
        let route = RouteSpec {
            stops: vec![leg("A", Some(100.0)), leg("B", Some(100.0)), leg("C", None)],
        };
        assert!(route.validate().is_ok());
    }

    #[test]
    fn empty_route_rejected() {
        let route = RouteSpec { stops: vec![] };
        assert_eq!(route.validate(), Err(ModelError::EmptyRoute));
    }

    #[test]
    fn duplicate_stop_rejected() {
        let route = RouteSpec {
            stops: vec![leg("A", Some(1.0)), leg("A", None)],
        };
        assert_eq!(route.validate(), Err(ModelError::DuplicateStop("A".into())));
    }

    #[test]
    fn missing_or_negative_travel_time_rejected() {
        let missing = RouteSpec {
            stops: vec![leg("A", None), leg("B", None)],
        };
        assert!(matches!(
            missing.validate(),
            Err(ModelError::MissingTravelTime { .. })
        ));
        let negative = RouteSpec {
            stops: vec![leg("A", Some(-5.0)), leg("B", None)],
        };
        assert!(matches!(
            negative.validate(),
            Err(ModelError::NegativeTravelTime { .. })
        ));
    }

    #[test]
    fn terminal_travel_time_is_tolerated() {
        // The last entry's travel time is unused; a value there is accepted.
        let route = RouteSpec {
            stops: vec![leg("A", Some(10.0)), leg("B", Some(0.0))],
        };
        assert!(route.validate().is_ok());
    }

    #[test]
    fn demand_validation() {
        let ok = DemandSpec {
            arrival_rate: 0.013,
            destinations: vec!["Z".into()],
        };
        assert!(ok.validate("A").is_ok());

        let negative = DemandSpec {
            arrival_rate: -1.0,
            destinations: vec!["Z".into()],
        };
        assert!(matches!(
            negative.validate("A"),
            Err(ModelError::NegativeArrivalRate { .. })
        ));

        let no_dest = DemandSpec {
            arrival_rate: 0.5,
            destinations: vec![],
        };
        assert!(matches!(
            no_dest.validate("A"),
            Err(ModelError::DemandWithoutDestinations { .. })
        ));

        // Zero rate with no destinations is a valid terminal configuration.
        let terminal = DemandSpec {
            arrival_rate: 0.0,
            destinations: vec![],
        };
        assert!(terminal.validate("Z").is_ok());
    }

    #[test]
    fn peak_windows_inclusive_bounds() {
        let w = PeakWindow::new(7.0 * 3600.0, 9.0 * 3600.0);
        assert!(w.contains(7.0 * 3600.0));
        assert!(w.contains(8.0 * 3600.0));
        assert!(w.contains(9.0 * 3600.0));
        assert!(!w.contains(9.0 * 3600.0 + 1.0));
    }

    #[test]
    fn fleet_policy_extra_buses_by_time_of_day() {
        let policy = FleetPolicy {
            headway_secs: 600.0,
            peak_windows: vec![
                PeakWindow::new(7.0 * 3600.0, 9.0 * 3600.0),
                PeakWindow::new(17.0 * 3600.0, 19.0 * 3600.0),
            ],
            extra_offpeak: 1,
            extra_peak: 2,
        };
        assert!(policy.validate().is_ok());
        assert_eq!(policy.extra_buses(8.0 * 3600.0), 2);
        assert_eq!(policy.extra_buses(12.0 * 3600.0), 1);
        assert_eq!(policy.extra_buses(18.0 * 3600.0), 2);
        assert_eq!(FleetPolicy::base(600.0).extra_buses(8.0 * 3600.0), 0);
    }

    #[test]
    fn fleet_policy_rejects_bad_headway_and_windows() {
        assert_eq!(
            FleetPolicy::base(0.0).validate(),
            Err(ModelError::NonPositiveHeadway(0.0))
        );
        assert_eq!(
            FleetPolicy::base(-10.0).validate(),
            Err(ModelError::NonPositiveHeadway(-10.0))
        );
        let mut backwards = FleetPolicy::base(600.0);
        backwards.peak_windows.push(PeakWindow::new(9.0 * 3600.0, 7.0 * 3600.0));
        assert!(matches!(
            backwards.validate(),
            Err(ModelError::InvalidPeakWindow { .. })
        ));
    }

    #[test]
    fn headway_for_frequency() {
        assert_eq!(FleetPolicy::headway_for_frequency(6.0), 600.0);
    }

    fn params() -> VehicleParams {
        VehicleParams {
            capacity: 50,
            boarding_secs: 2.0,
            alighting_secs: 1.0,
            fine_cost: 1_000.0,
            horizon_secs: 7.0 * 86_400.0,
        }
    }

    #[test]
    fn vehicle_params_validation() {
        assert!(params().validate().is_ok());

        let mut zero_cap = params();
        zero_cap.capacity = 0;
        assert_eq!(zero_cap.validate(), Err(ModelError::NonPositiveCapacity));

        let mut neg_board = params();
        neg_board.boarding_secs = -2.0;
        assert!(matches!(
            neg_board.validate(),
            Err(ModelError::NegativeTime { param: "boarding time", .. })
        ));

        let mut neg_fine = params();
        neg_fine.fine_cost = -1.0;
        assert_eq!(neg_fine.validate(), Err(ModelError::NegativeFineCost(-1.0)));

        // Zero fine cost is legal — it is the degenerate no-penalty scenario.
        let mut free = params();
        free.fine_cost = 0.0;
        assert!(free.validate().is_ok());
    }
}
