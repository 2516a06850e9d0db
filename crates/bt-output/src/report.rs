//! Aggregate statistics over a run summary.
//!
//! Pure functions — no file I/O.  Stops are reported in route order, taken
//! from the summary itself, so output ordering is deterministic.

use std::fmt;

use bt_sim::RunSummary;

/// Bucket the wait-time series into `buckets` intervals of `bucket_secs`
/// each; the final bucket also absorbs everything beyond the last edge.
pub fn wait_histogram(wait_times: &[f64], bucket_secs: f64, buckets: usize) -> Vec<u64> {
    let mut counts = vec![0u64; buckets];
    if buckets == 0 || bucket_secs <= 0.0 {
        return counts;
    }
    for &wait in wait_times {
        let idx = ((wait / bucket_secs) as usize).min(buckets - 1);
        counts[idx] += 1;
    }
    counts
}

/// Per-stop aggregates of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct StopReport {
    pub name: String,
    /// Mean of this stop's occupancy snapshots, in percent.  `None` when no
    /// bus ever visited (zero-length run).
    pub mean_occupancy_pct: Option<f64>,
    pub fine_count: u64,
    pub unserved: u64,
}

/// Human-facing aggregates of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub passengers_served: usize,
    pub mean_wait_secs: Option<f64>,
    pub max_wait_secs: Option<f64>,
    pub stops: Vec<StopReport>,
    pub buses_dispatched: u64,
    pub total_fine_cost: f64,
}

impl RunReport {
    pub fn from_summary(summary: &RunSummary) -> Self {
        let mean_wait_secs = mean(&summary.wait_times);
        let max_wait_secs = summary
            .wait_times
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |m| m.max(w))));

        let stops = summary
            .stops
            .iter()
            .map(|stop| {
                let occupancies: Vec<f64> = summary
                    .occupancy
                    .iter()
                    .filter(|o| o.stop == stop.name)
                    .map(|o| o.occupancy_pct)
                    .collect();
                StopReport {
                    name: stop.name.clone(),
                    mean_occupancy_pct: mean(&occupancies),
                    fine_count: summary.fines.iter().filter(|f| f.stop == stop.name).count()
                        as u64,
                    unserved: stop.unserved,
                }
            })
            .collect();

        Self {
            passengers_served: summary.wait_times.len(),
            mean_wait_secs,
            max_wait_secs,
            stops,
            buses_dispatched: summary.buses_dispatched,
            total_fine_cost: summary.total_fine_cost,
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "passengers served: {}", self.passengers_served)?;
        match self.mean_wait_secs {
            Some(mean) => writeln!(f, "mean wait: {:.1} min", mean / 60.0)?,
            None => writeln!(f, "mean wait: n/a")?,
        }
        if let Some(max) = self.max_wait_secs {
            writeln!(f, "max wait:  {:.1} min", max / 60.0)?;
        }
        writeln!(f, "buses dispatched: {}", self.buses_dispatched)?;
        writeln!(f, "total fines: {:.0}", self.total_fine_cost)?;
        for stop in &self.stops {
            let occ = match stop.mean_occupancy_pct {
                Some(o) => format!("{o:.1}%"),
                None => "n/a".to_owned(),
            };
            writeln!(
                f,
                "  {}: mean occupancy {}, fines {}, unserved {}",
                stop.name, occ, stop.fine_count, stop.unserved
            )?;
        }
        Ok(())
    }
}
