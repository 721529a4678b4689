use crate::utils::time::elapsed_seconds;
use chrono::NaiveDateTime;

/// The running session (a record with no end yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub record_id: i64,
    pub company_id: i64,
    pub company: String,
    pub started_at: NaiveDateTime,
}

impl ActiveSession {
    pub fn elapsed_at(&self, now: &NaiveDateTime) -> i64 {
        elapsed_seconds(&self.started_at, now)
    }
}
