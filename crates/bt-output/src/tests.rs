use bt_model::{DemandSpec, FleetPolicy, RouteSpec, RouteStopSpec, VehicleParams};
use bt_sim::{RunSummary, SimBuilder, StopSummary};

use crate::{wait_histogram, CsvExporter, RunReport};

fn small_summary() -> RunSummary {
    let sim = SimBuilder::new(
        RouteSpec {
            stops: vec![
                RouteStopSpec {
                    stop_name: "A".to_owned(),
                    travel_to_next_secs: Some(300.0),
                },
                RouteStopSpec {
                    stop_name: "B".to_owned(),
                    travel_to_next_secs: None,
                },
            ],
        },
        FleetPolicy::base(600.0),
        VehicleParams {
            capacity: 10,
            boarding_secs: 2.0,
            alighting_secs: 1.0,
            fine_cost: 1000.0,
            horizon_secs: 7_200.0,
        },
    )
    .demand(
        "A",
        DemandSpec {
            arrival_rate: 0.01,
            destinations: vec!["B".to_owned()],
        },
    )
    .demand(
        "B",
        DemandSpec {
            arrival_rate: 0.0,
            destinations: vec![],
        },
    )
    .seed(7)
    .build()
    .unwrap();
    sim.run()
}

mod csv {
    use super::*;

    #[test]
    fn writes_all_files() {
        let summary = small_summary();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("run");

        CsvExporter::new(&out).write(&summary).unwrap();

        for name in [
            "occupancy.csv",
            "boardings.csv",
            "alightings.csv",
            "fines.csv",
            "stops.csv",
            "wait_times.csv",
        ] {
            assert!(out.join(name).exists(), "missing {name}");
        }
    }

    #[test]
    fn stop_rows_match_summary() {
        let summary = small_summary();
        let dir = tempfile::tempdir().unwrap();
        CsvExporter::new(dir.path()).write(&summary).unwrap();

        let text = std::fs::read_to_string(dir.path().join("stops.csv")).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,generated,unserved,left_waiting"));
        // One data row per route stop, in route order.
        assert_eq!(lines.count(), summary.stops.len());
        assert!(text.contains("\nA,"));
    }

    #[test]
    fn wait_rows_have_header_and_counts() {
        let summary = small_summary();
        let dir = tempfile::tempdir().unwrap();
        CsvExporter::new(dir.path()).write(&summary).unwrap();

        let text = std::fs::read_to_string(dir.path().join("wait_times.csv")).unwrap();
        assert_eq!(text.lines().next(), Some("wait_secs"));
        assert_eq!(text.lines().count(), summary.wait_times.len() + 1);
    }
}

mod report {
    use super::*;

    fn summary_fixture() -> RunSummary {
        let mut summary = small_summary();
        summary.wait_times = vec![10.0, 20.0, 60.0];
        summary
    }

    #[test]
    fn wait_aggregates() {
        let report = RunReport::from_summary(&summary_fixture());
        assert_eq!(report.passengers_served, 3);
        assert_eq!(report.mean_wait_secs, Some(30.0));
        assert_eq!(report.max_wait_secs, Some(60.0));
    }

    #[test]
    fn empty_run_has_no_wait_stats() {
        let mut summary = small_summary();
        summary.wait_times.clear();
        let report = RunReport::from_summary(&summary);
        assert_eq!(report.passengers_served, 0);
        assert_eq!(report.mean_wait_secs, None);
        assert_eq!(report.max_wait_secs, None);
    }

    #[test]
    fn stops_follow_route_order() {
        let report = RunReport::from_summary(&small_summary());
        let names: Vec<&str> = report.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn per_stop_fine_counts_sum_to_total() {
        let summary = small_summary();
        let report = RunReport::from_summary(&summary);
        let total: u64 = report.stops.iter().map(|s| s.fine_count).sum();
        assert_eq!(total, summary.fines.len() as u64);
    }

    #[test]
    fn unserved_copied_from_summary() {
        let mut summary = small_summary();
        summary.stops = vec![StopSummary {
            name: "A".to_owned(),
            generated: 5,
            unserved: 3,
            left_waiting: 1,
        }];
        let report = RunReport::from_summary(&summary);
        assert_eq!(report.stops[0].unserved, 3);
    }

    #[test]
    fn display_mentions_every_stop() {
        let report = RunReport::from_summary(&small_summary());
        let rendered = report.to_string();
        assert!(rendered.contains("passengers served"));
        assert!(rendered.contains("A:"));
        assert!(rendered.contains("B:"));
    }
}

mod histogram {
    use super::*;

    #[test]
    fn buckets_by_width() {
        let counts = wait_histogram(&[5.0, 15.0, 25.0, 25.0], 10.0, 3);
        assert_eq!(counts, [1, 1, 2]);
    }

    #[test]
    fn last_bucket_absorbs_overflow() {
        let counts = wait_histogram(&[5.0, 1_000.0], 10.0, 3);
        assert_eq!(counts, [1, 0, 1]);
    }

    #[test]
    fn degenerate_inputs_yield_zeroes() {
        assert!(wait_histogram(&[1.0], 10.0, 0).is_empty());
        assert_eq!(wait_histogram(&[1.0], 0.0, 2), [0, 0]);
    }
}
