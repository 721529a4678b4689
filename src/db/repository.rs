//! The two read contracts the terminal views depend on.
//!
//! Views take a `&dyn TimeRepository` so they never know where records live;
//! `SqliteRepository` opens a connection per call and drops it afterwards.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_entry::DayEntry;
use crate::models::session::ActiveSession;
use chrono::NaiveDateTime;

pub trait TimeRepository {
    /// Completed records starting in `[start, end)`, summed per day and company.
    fn records_in_range(&self, start: NaiveDateTime, end: NaiveDateTime)
    -> AppResult<Vec<DayEntry>>;

    /// The currently running session, if any.
    fn active_session(&self) -> AppResult<Option<ActiveSession>>;
}

pub struct SqliteRepository {
    db_path: String,
}

impl SqliteRepository {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn open(&self) -> AppResult<DbPool> {
        DbPool::new(&self.db_path)
    }
}

impl TimeRepository for SqliteRepository {
    fn records_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<DayEntry>> {
        let pool = self.open()?;
        queries::day_entries_in_range(&pool.conn, &start, &end)
    }

    fn active_session(&self) -> AppResult<Option<ActiveSession>> {
        let pool = self.open()?;
        queries::active_session(&pool.conn)
    }
}
