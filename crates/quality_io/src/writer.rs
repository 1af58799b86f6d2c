//! Report persistence.
//!
//! Writes a `QualityReport` as one CSV file per section into an output
//! directory: the file name is the section name, the header row is the
//! section's result columns, and there is no index column.

use crate::{IoError, Result};
use quality_core::QualityReport;
use std::path::Path;
use tracing::info;

/// Writes each report section to `<dir>/<section>.csv`.
///
/// Creates the directory if it does not exist. Empty sections produce a
/// file with only the header row, keeping the written file set identical
/// across runs.
pub fn write_report(report: &QualityReport, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| IoError::WriteFailed {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    for (section, table) in report.sections() {
        let path = dir.join(format!("{}.csv", section));
        let mut writer = csv::Writer::from_path(&path).map_err(|e| IoError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;

        writer
            .write_record(table.columns())
            .map_err(|e| IoError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        for row in table.rows() {
            let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writer
                .write_record(&record)
                .map_err(|e| IoError::WriteFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
        }

        writer.flush().map_err(|e| IoError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
    }

    info!(dir = %dir.display(), sections = report.len(), "Report written");
    Ok(())
}
