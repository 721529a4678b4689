use rusqlite::{Connection, OptionalExtension, Result};

/// Tables owned by the schema, in creation order.
const TABLES: [(&str, &str); 3] = [
    (
        "log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "companies",
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id    INTEGER PRIMARY KEY,
            name  TEXT NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "records",
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id  INTEGER NOT NULL REFERENCES companies(id),
            start_ts    TEXT NOT NULL,
            end_ts      TEXT,
            duration    INTEGER
        );
        "#,
    ),
];

pub(crate) fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_records_start ON records(start_ts);
        CREATE INDEX IF NOT EXISTS idx_records_end ON records(end_ts);
        "#,
    )
}

/// Public entry point: create every missing table and index.
///
/// Idempotent, so it runs on every connection open. Returns the names of the
/// tables that did not exist before this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut created = Vec::new();

    for (name, ddl) in TABLES {
        if !table_exists(conn, name)? {
            conn.execute_batch(ddl)?;
            created.push(name);
        }
    }

    ensure_indexes(conn)?;

    Ok(created)
}
