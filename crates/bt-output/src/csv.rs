//! CSV output backend.
//!
//! Writes one file per record stream into the configured directory:
//! `occupancy.csv`, `boardings.csv`, `alightings.csv`, `fines.csv`,
//! `wait_times.csv`, and `stops.csv`.  Headers come from the record
//! structs' field names via serde.

use std::fs;
use std::path::{Path, PathBuf};

use ::csv::Writer;
use serde::Serialize;

use bt_sim::RunSummary;

use crate::OutputResult;

/// One wait-time sample; its own row type so the series gets a header.
#[derive(Serialize)]
struct WaitRow {
    wait_secs: f64,
}

/// Writes a [`RunSummary`] as a directory of CSV files.
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write all six files, creating the directory if needed.  Existing
    /// files from a previous run are overwritten.
    pub fn write(&self, summary: &RunSummary) -> OutputResult<()> {
        fs::create_dir_all(&self.dir)?;

        write_rows(&self.dir.join("occupancy.csv"), &summary.occupancy)?;
        write_rows(&self.dir.join("boardings.csv"), &summary.boardings)?;
        write_rows(&self.dir.join("alightings.csv"), &summary.alightings)?;
        write_rows(&self.dir.join("fines.csv"), &summary.fines)?;
        write_rows(&self.dir.join("stops.csv"), &summary.stops)?;

        let waits: Vec<WaitRow> = summary
            .wait_times
            .iter()
            .map(|&wait_secs| WaitRow { wait_secs })
            .collect();
        write_rows(&self.dir.join("wait_times.csv"), &waits)?;

        Ok(())
    }
}

fn write_rows<R: Serialize>(path: &Path, rows: &[R]) -> OutputResult<()> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
