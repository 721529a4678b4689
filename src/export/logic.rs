// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::month::MonthRef;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{company_records_in_range, find_company};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::{month_name, parse_month_year, today};
use std::path::{Path, PathBuf};

/// High-level logic for exporting one company's month of records.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records of `company` that start in the given month.
    ///
    /// - `month`: `MM/YY` or `MM/YYYY`, current month when `None`
    /// - `file`: output path, default `<export_dir>/<company>_<MM_YYYY>.<ext>`
    ///
    /// Returns the path written, or `None` when there was nothing to export.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        company: &str,
        month: Option<&str>,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let company = find_company(&pool.conn, company.trim())?
            .ok_or_else(|| AppError::CompanyNotFound(company.to_string()))?;

        let month = match month {
            Some(m) => MonthRef::containing(parse_month_year(m)?)?,
            None => MonthRef::containing(today())?,
        };

        let (start, end) = month.bounds();
        let rows: Vec<RecordExport> = company_records_in_range(&pool.conn, company.id, &start, &end)?
            .iter()
            .map(RecordExport::from)
            .collect();

        if rows.is_empty() {
            warning(format!(
                "No records found for '{}' in {} {}.",
                company.name,
                month_name(month.month()),
                month.year()
            ));
            return Ok(None);
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => default_export_path(Path::new(&cfg.export_dir), &company.name, &month, format),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => {
                let title = format!(
                    "Time records for {} - {} {}",
                    company.name,
                    month_name(month.month()),
                    month.year()
                );
                export_xlsx(&rows, &path, &title)?
            }
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &company.name,
            &format!(
                "{} records exported as {} to {}",
                rows.len(),
                format,
                path.display()
            ),
        );

        Ok(Some(path))
    }
}

/// `<dir>/<company>_<MM_YYYY>.<ext>`; spaces and path separators in the
/// company name become underscores.
pub fn default_export_path(dir: &Path, company: &str, month: &MonthRef, format: ExportFormat) -> PathBuf {
    let safe: String = company
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();

    dir.join(format!(
        "{}_{:02}_{}.{}",
        safe,
        month.month(),
        month.year(),
        format.extension()
    ))
}
