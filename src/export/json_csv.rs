// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, RecordExport, notify_export_success};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(ExportFormat::Json, rows.len(), path);
    Ok(())
}

/// Export CSV (header taken from the serde field names).
pub(crate) fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success(ExportFormat::Csv, rows.len(), path);
    Ok(())
}
