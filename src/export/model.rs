// src/export/model.rs

use crate::models::record::TimeRecord;
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat row for export; one per record.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub company: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub duration: String,
    #[serde(skip)]
    pub seconds: i64,
}

impl From<&TimeRecord> for RecordExport {
    fn from(r: &TimeRecord) -> Self {
        // Running sessions are exported with empty end and zero duration.
        let secs = if r.is_active() { 0 } else { r.seconds() };
        Self {
            id: r.id,
            company: r.company.clone(),
            start_date: r.start.format("%Y-%m-%d").to_string(),
            start_time: r.start.format("%H:%M:%S").to_string(),
            end_date: r
                .end
                .map(|e| e.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            end_time: r
                .end
                .map(|e| e.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            duration_minutes: secs / 60,
            duration: format_duration(secs),
            seconds: secs,
        }
    }
}

/// Header for XLSX (CSV/JSON take field names from serde).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "ID",
        "Company",
        "Start date",
        "Start time",
        "End date",
        "End time",
        "Duration (min)",
        "Duration",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.company.clone(),
        r.start_date.clone(),
        r.start_time.clone(),
        r.end_date.clone(),
        r.end_time.clone(),
        r.duration_minutes.to_string(),
        r.duration.clone(),
    ]
}
