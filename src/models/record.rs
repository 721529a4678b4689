use crate::utils::time::elapsed_seconds;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// One start→stop interval for a company.
///
/// `end` and `duration` stay `None` while the session is running; they are set
/// once on stop and never touched again.
#[derive(Debug, Clone, Serialize)]
pub struct TimeRecord {
    pub id: i64,
    pub company_id: i64,
    pub company: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration: Option<i64>,
}

impl TimeRecord {
    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }

    /// Stored duration, or the time elapsed so far for an active record.
    pub fn seconds(&self) -> i64 {
        match self.duration {
            Some(d) => d,
            None => elapsed_seconds(&self.start, &Local::now().naive_local()),
        }
    }
}
