//! Per-company monthly export of time records.
//!
//! `logic` selects the records and the output path; the writers in
//! `json_csv` and `xlsx` turn `RecordExport` rows into files.

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::{ExportLogic, default_export_path};
pub use model::RecordExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// File extension, also used as the format name in the internal log.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub(crate) fn notify_export_success(format: ExportFormat, rows: usize, path: &Path) {
    success(format!(
        "{} export completed: {} records written to {}",
        format.label(),
        rows,
        path.display()
    ));
}
