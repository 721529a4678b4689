use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{active_session, close_record, get_or_create_company, insert_start};
use crate::errors::{AppError, AppResult};
use crate::models::session::ActiveSession;
use crate::utils::time::{DISPLAY_FORMAT, elapsed_seconds, format_duration};
use chrono::NaiveDateTime;

/// Result of a successful `stop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoppedSession {
    pub company: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    pub duration: i64,
}

/// High-level business logic for `start`, `stop` and `status`.
pub struct TrackLogic;

impl TrackLogic {
    /// Open a session for `company` at `now`.
    ///
    /// Fails when another session is still running. The check and the insert
    /// are two statements; only one process is expected to write.
    pub fn start(pool: &DbPool, company: &str, now: NaiveDateTime) -> AppResult<ActiveSession> {
        let name = company.trim();
        if name.is_empty() {
            return Err(AppError::Other("company name must not be empty".into()));
        }

        if let Some(active) = active_session(&pool.conn)? {
            return Err(AppError::SessionAlreadyActive {
                company: active.company,
                since: active.started_at.format(DISPLAY_FORMAT).to_string(),
            });
        }

        let company_id = get_or_create_company(&pool.conn, name)?;
        let record_id = insert_start(&pool.conn, company_id, &now)?;

        ttlog_quiet(
            &pool.conn,
            "start",
            name,
            &format!("Session started at {}", now.format(DISPLAY_FORMAT)),
        );

        Ok(ActiveSession {
            record_id,
            company_id,
            company: name.to_string(),
            started_at: now,
        })
    }

    /// Close the running session at `now`.
    pub fn stop(pool: &DbPool, now: NaiveDateTime) -> AppResult<StoppedSession> {
        let active = active_session(&pool.conn)?.ok_or(AppError::NoActiveSession)?;

        let duration = elapsed_seconds(&active.started_at, &now);
        close_record(&pool.conn, active.record_id, &now, duration)?;

        ttlog_quiet(
            &pool.conn,
            "stop",
            &active.company,
            &format!("Session stopped after {}", format_duration(duration)),
        );

        Ok(StoppedSession {
            company: active.company,
            started_at: active.started_at,
            ended_at: now,
            duration,
        })
    }

    pub fn status(pool: &DbPool) -> AppResult<Option<ActiveSession>> {
        active_session(&pool.conn)
    }
}
