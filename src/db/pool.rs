//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! A `DbPool` lives for one logical operation: open, run queries, drop.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    created: Vec<&'static str>,
}

impl DbPool {
    /// Open the database at `path` and make sure the schema exists.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let created = init_db(&conn)?;
        Ok(Self { conn, created })
    }

    /// In-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let created = init_db(&conn)?;
        Ok(Self { conn, created })
    }

    /// Tables this open had to create; empty on an existing database.
    pub fn created_tables(&self) -> &[&'static str] {
        &self.created
    }
}
