use crate::results::{CSV_HEADERS, CsvRow};
use chrono::Local;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the aggregated rows to a timestamped CSV file under `dir`,
/// header first, and returns the path of the written file.
pub fn write_report(dir: impl AsRef<Path>, rows: &[CsvRow]) -> Result<PathBuf, Box<dyn Error>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let timestamp = Local::now().format("%d-%m-%Y-%H-%M");
    let path = dir.join(format!("products-{timestamp}.csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;

    Ok(path)
}
