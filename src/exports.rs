use std::fs::{create_dir_all, metadata, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use csv::Writer;
use log::info;
use serde::Serialize;

/// Flat tuple so csv::Writer can serialize it
#[derive(Serialize)]
pub struct EvalRecord(
    pub usize, // batch
    pub usize, // batch_size
    pub f32,   // mean_q
    pub f32,   // max_q
    pub f32,   // min_q
    pub f64,   // total_elapsed_secs
    pub f64,   // interval_elapsed_secs
);

/// Handles run directory creation, CSV setup, and per-batch record writing.
pub struct EvalLogger {
    writer: Writer<File>,
    start_time: Instant,
    last_log_time: Instant,
    run_dir: PathBuf,
}

impl EvalLogger {
    /// Create a new run folder under `base_dir`, open CSV with `metadata.csv`.
    pub fn new(base_dir: &str) -> Result<Self, csv::Error> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let run_dir = Path::new(base_dir).join(format!("run{timestamp}"));
        create_dir_all(&run_dir)?;

        let csv_path = run_dir.join("metadata.csv");
        let is_new = !csv_path.exists();
        let file = OpenOptions::new().create(true).append(true).open(&csv_path)?;
        let mut writer = Writer::from_writer(file);
        if is_new || metadata(&csv_path).map(|m| m.len() == 0).unwrap_or(true) {
            writer.write_record(&[
                "batch",
                "batch_size",
                "mean_q",
                "max_q",
                "min_q",
                "total_elapsed_secs",
                "interval_elapsed_secs",
            ])?;
            writer.flush()?;
        }

        info!("evaluation run directory: {}", run_dir.display());

        let now = Instant::now();
        Ok(EvalLogger {
            writer,
            start_time: now,
            last_log_time: now,
            run_dir,
        })
    }

    /// Append one per-batch record, flushing so aborted runs keep their rows.
    pub fn log(
        &mut self,
        batch: usize,
        batch_size: usize,
        mean_q: f32,
        max_q: f32,
        min_q: f32,
    ) -> Result<(), csv::Error> {
        let now = Instant::now();
        let total = now.duration_since(self.start_time).as_secs_f64();
        let interval = now.duration_since(self.last_log_time).as_secs_f64();
        self.last_log_time = now;

        let rec = EvalRecord(batch, batch_size, mean_q, max_q, min_q, total, interval);
        self.writer.serialize(rec)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Expose run directory path
    pub fn run_dir(&self) -> &PathBuf {
        &self.run_dir
    }
}
