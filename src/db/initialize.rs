use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Returns the tables created by this call (empty when already up to date).
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let created = run_pending_migrations(conn)?;
    Ok(created)
}
