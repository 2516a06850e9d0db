//! base_week — one simulated week of the base scenario.
//!
//! Four stops on a single line: heavy demand at the origin, medium demand at
//! the two intermediate stops, and a terminal that only receives.  One bus
//! every 10 minutes around the clock; the commute peak windows are declared
//! but the base policy adds no buses during them.  Prints an aggregate
//! report and writes the full event record as CSV.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use bt_model::{DemandSpec, FleetPolicy, PeakWindow, RouteSpec, RouteStopSpec, VehicleParams};
use bt_output::{CsvExporter, RunReport, wait_histogram};
use bt_sim::SimBuilder;

// ── Scenario constants ────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const SIM_DAYS:     f64 = 7.0;
const HEADWAY_SECS: f64 = 600.0; // 6 buses per hour

const CAPACITY:       u32 = 50;
const BOARDING_SECS:  f64 = 2.0;
const ALIGHTING_SECS: f64 = 1.0;
const FINE_COST:      f64 = 1_000.0;

// Route length and pace give three equal legs between the four stops.
const ROUTE_KM:      f64 = 18.0;
const SECS_PER_KM:   f64 = 60.0;
const LEG_COUNT:     f64 = 3.0;

// Passenger arrivals per second at a nominal stop, scaled per demand class.
const BASE_RATE:      f64 = 0.013;
const FACTOR_HIGH:    f64 = 1.5;
const FACTOR_MEDIUM:  f64 = 1.0;

/// The base-week scenario, ready to seed and build.
///
/// The terminal's arrival rate is zero: it only receives, and a positive
/// rate with nowhere to send passengers would be rejected at validation.
fn scenario() -> SimBuilder {
    let leg_secs = ROUTE_KM * SECS_PER_KM / LEG_COUNT;
    let route = RouteSpec {
        stops: vec![
            RouteStopSpec {
                stop_name: "Origin".to_owned(),
                travel_to_next_secs: Some(leg_secs),
            },
            RouteStopSpec {
                stop_name: "Midtown".to_owned(),
                travel_to_next_secs: Some(leg_secs),
            },
            RouteStopSpec {
                stop_name: "University".to_owned(),
                travel_to_next_secs: Some(leg_secs),
            },
            RouteStopSpec {
                stop_name: "Terminal".to_owned(),
                travel_to_next_secs: None,
            },
        ],
    };

    // Commute peaks are part of the scenario description; the base policy
    // dispatches no extra buses during them.
    let policy = FleetPolicy {
        headway_secs: HEADWAY_SECS,
        peak_windows: vec![
            PeakWindow::new(7.0 * 3_600.0, 9.0 * 3_600.0),
            PeakWindow::new(17.0 * 3_600.0, 19.0 * 3_600.0),
        ],
        extra_offpeak: 0,
        extra_peak: 0,
    };

    let params = VehicleParams {
        capacity: CAPACITY,
        boarding_secs: BOARDING_SECS,
        alighting_secs: ALIGHTING_SECS,
        fine_cost: FINE_COST,
        horizon_secs: SIM_DAYS * 24.0 * 3_600.0,
    };

    // The whole line feeds the terminal; the terminal itself only receives.
    let rate = BASE_RATE * FACTOR_HIGH;
    let to_terminal = vec!["Terminal".to_owned()];
    let demand = [
        ("Origin", rate * FACTOR_HIGH, to_terminal.clone()),
        ("Midtown", rate * FACTOR_MEDIUM, to_terminal.clone()),
        ("University", rate * FACTOR_MEDIUM, to_terminal),
        ("Terminal", 0.0, vec![]),
    ];

    let mut builder = SimBuilder::new(route, policy, params);
    for (name, arrival_rate, destinations) in demand {
        builder = builder.demand(
            name,
            DemandSpec {
                arrival_rate,
                destinations,
            },
        );
    }
    builder
}

fn main() -> Result<()> {
    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));

    let sim = scenario().seed(SEED).build()?;

    println!("=== base week — bus-transit simulation ===");
    println!(
        "Days: {SIM_DAYS}  |  Headway: {HEADWAY_SECS} s  |  Capacity: {CAPACITY}  |  Seed: {SEED}"
    );
    println!();

    let t0 = Instant::now();
    let summary = sim.run();
    let elapsed = t0.elapsed();

    let report = RunReport::from_summary(&summary);
    println!("{report}");

    // 5-minute buckets up to half an hour, plus an overflow bucket.
    let hist = wait_histogram(&summary.wait_times, 300.0, 7);
    println!("wait distribution (5-min buckets):");
    for (i, count) in hist.iter().enumerate() {
        let label = if i + 1 == hist.len() {
            format!("{:>3}+ min", i * 5)
        } else {
            format!("{:>2}-{:<2} min", i * 5, (i + 1) * 5)
        };
        println!("  {label}: {count}");
    }
    println!();

    CsvExporter::new(&out_dir).write(&summary)?;
    println!(
        "Simulation complete in {:.3} s — CSV written to {}",
        elapsed.as_secs_f64(),
        out_dir.display()
    );

    Ok(())
}
