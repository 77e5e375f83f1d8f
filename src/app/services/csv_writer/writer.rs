//! CSV file creation and record serialization

use std::path::Path;
use tracing::{debug, info};

use super::stats::WriteStats;
use crate::app::models::CatalogRecord;
use crate::constants::columns;
use crate::{Error, Result};

/// Write records to a CSV file with a header row
///
/// The parent directory is created if missing. An existing output file is
/// only replaced when `force_overwrite` is set; otherwise it is left
/// untouched and a configuration error is returned, so a failed run never
/// leaves partial output behind an old table.
pub fn write_records(
    path: &Path,
    records: &[CatalogRecord],
    force_overwrite: bool,
) -> Result<WriteStats> {
    info!(
        "Writing {} records to {}",
        records.len(),
        path.display()
    );

    if path.exists() && !force_overwrite {
        return Err(Error::configuration(format!(
            "Output file '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory '{}'", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_writing(
            path.display().to_string(),
            "Failed to create output file",
            Some(e),
        )
    })?;

    writer.write_record(columns::ALL).map_err(|e| {
        Error::csv_writing(path.display().to_string(), "Failed to write header", Some(e))
    })?;

    for (index, record) in records.iter().enumerate() {
        writer.write_record(record.to_row()).map_err(|e| {
            Error::csv_writing(
                path.display().to_string(),
                format!("Failed to write record {}", index + 1),
                Some(e),
            )
        })?;
    }

    writer.flush().map_err(|e| {
        Error::io(
            format!("Failed to flush output file '{}'", path.display()),
            e,
        )
    })?;

    let bytes_written = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    debug!(
        "Wrote {} records ({} bytes) to {}",
        records.len(),
        bytes_written,
        path.display()
    );

    Ok(WriteStats {
        records_written: records.len(),
        bytes_written,
    })
}
