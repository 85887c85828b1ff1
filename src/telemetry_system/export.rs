//! Writes finished series to disk, one pretty-printed JSON array per field
//! per body. Failures stay in this module's error type; the simulation core
//! never sees them.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::control::composer::MultiBodyResult;
use crate::telemetry_system::telemetry::SimulationSeries;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn export_series(dir: &Path, name: &str, series: &SimulationSeries) -> Result<(), ExportError> {
    write_field(dir, name, "times", &series.times)?;
    write_field(dir, name, "positions", &series.positions)?;
    write_field(dir, name, "velocities", &series.velocities)?;
    write_field(dir, name, "drag_forces", &series.drag_forces)?;
    Ok(())
}

pub fn export_result(dir: &Path, result: &MultiBodyResult) -> Result<(), ExportError> {
    for (name, series) in result {
        export_series(dir, name, series)?;
    }
    Ok(())
}

fn write_field(dir: &Path, name: &str, field: &str, values: &[f64]) -> Result<(), ExportError> {
    let path = dir.join(format!("{}_{}.json", name, field));
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, values)?;
    Ok(())
}
