use crate::errors::{AppError, AppResult};
use crate::models::company::Company;
use crate::models::day_entry::DayEntry;
use crate::models::record::TimeRecord;
use crate::models::session::ActiveSession;
use crate::utils::time::{elapsed_seconds, format_timestamp, parse_timestamp};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

/// Optional filters for `list_records`.
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    /// Substring match on the company name.
    pub company: Option<String>,
    /// Inclusive lower bound on the start date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the start date.
    pub to: Option<NaiveDate>,
}

fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn ts_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw).map_err(|e| conversion_error(idx, e))
}

fn opt_ts_column(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| parse_timestamp(&s).map_err(|e| conversion_error(idx, e)))
        .transpose()
}

/// Mapping for `SELECT r.id, r.company_id, c.name, r.start_ts, r.end_ts, r.duration`.
pub fn map_record(row: &Row) -> rusqlite::Result<TimeRecord> {
    Ok(TimeRecord {
        id: row.get(0)?,
        company_id: row.get(1)?,
        company: row.get(2)?,
        start: ts_column(row, 3)?,
        end: opt_ts_column(row, 4)?,
        duration: row.get(5)?,
    })
}

// ------------------------------------------------
// Companies
// ------------------------------------------------

pub fn find_company(conn: &Connection, name: &str) -> AppResult<Option<Company>> {
    let company = conn
        .query_row(
            "SELECT id, name FROM companies WHERE name = ?1",
            [name],
            |row| {
                Ok(Company {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(company)
}

/// Return the id of `name`, creating the company on first use.
pub fn get_or_create_company(conn: &Connection, name: &str) -> AppResult<i64> {
    if let Some(c) = find_company(conn, name)? {
        return Ok(c.id);
    }

    conn.execute("INSERT INTO companies (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

// ------------------------------------------------
// Records
// ------------------------------------------------

/// The record with no end, if any. When several exist (written by an external
/// tool), the most recent one wins.
pub fn active_session(conn: &Connection) -> AppResult<Option<ActiveSession>> {
    let session = conn
        .query_row(
            "SELECT r.id, r.company_id, c.name, r.start_ts
             FROM records r
             JOIN companies c ON c.id = r.company_id
             WHERE r.end_ts IS NULL
             ORDER BY r.start_ts DESC
             LIMIT 1",
            [],
            |row| {
                Ok(ActiveSession {
                    record_id: row.get(0)?,
                    company_id: row.get(1)?,
                    company: row.get(2)?,
                    started_at: ts_column(row, 3)?,
                })
            },
        )
        .optional()?;
    Ok(session)
}

/// Insert an open record (start only).
pub fn insert_start(conn: &Connection, company_id: i64, start: &NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO records (company_id, start_ts, end_ts, duration) VALUES (?1, ?2, NULL, NULL)",
        params![company_id, format_timestamp(start)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close an open record. Only records without an end are touched.
pub fn close_record(
    conn: &Connection,
    record_id: i64,
    end: &NaiveDateTime,
    duration: i64,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE records SET end_ts = ?1, duration = ?2 WHERE id = ?3 AND end_ts IS NULL",
        params![format_timestamp(end), duration, record_id],
    )?;

    if changed == 0 {
        return Err(AppError::NoActiveSession);
    }
    Ok(())
}

/// Insert an already finished record; duration is derived from the bounds.
pub fn insert_completed(
    conn: &Connection,
    company_id: i64,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO records (company_id, start_ts, end_ts, duration) VALUES (?1, ?2, ?3, ?4)",
        params![
            company_id,
            format_timestamp(start),
            format_timestamp(end),
            elapsed_seconds(start, end)
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Completed records whose start is in `[start, end)`, summed per start day
/// and company, ordered by day then company name.
pub fn day_entries_in_range(
    conn: &Connection,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<Vec<DayEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT substr(r.start_ts, 1, 10) AS day, c.name, SUM(r.duration)
         FROM records r
         JOIN companies c ON c.id = r.company_id
         WHERE r.end_ts IS NOT NULL
           AND r.start_ts >= ?1
           AND r.start_ts < ?2
         GROUP BY day, c.name
         ORDER BY day ASC, c.name ASC",
    )?;

    let rows = stmt.query_map(
        params![format_timestamp(start), format_timestamp(end)],
        |row| {
            let day: String = row.get(0)?;
            let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|_| conversion_error(0, AppError::InvalidDate(day.clone())))?;
            Ok(DayEntry {
                day: date.day(),
                company: row.get(1)?,
                seconds: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Completed records matching `filter`, newest first.
pub fn list_records(conn: &Connection, filter: &RecordFilter) -> AppResult<Vec<TimeRecord>> {
    let mut sql = String::from(
        "SELECT r.id, r.company_id, c.name, r.start_ts, r.end_ts, r.duration
         FROM records r
         JOIN companies c ON c.id = r.company_id
         WHERE r.end_ts IS NOT NULL",
    );
    let mut args: Vec<String> = Vec::new();

    if let Some(company) = &filter.company {
        args.push(format!("%{}%", company));
        sql.push_str(&format!(" AND c.name LIKE ?{}", args.len()));
    }
    if let Some(from) = &filter.from {
        args.push(date_key(from));
        sql.push_str(&format!(" AND substr(r.start_ts, 1, 10) >= ?{}", args.len()));
    }
    if let Some(to) = &filter.to {
        args.push(date_key(to));
        sql.push_str(&format!(" AND substr(r.start_ts, 1, 10) <= ?{}", args.len()));
    }
    sql.push_str(" ORDER BY r.start_ts DESC");

    let params: Vec<&dyn ToSql> = args.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Seconds worked per start day (completed records), oldest first.
pub fn daily_totals(conn: &Connection, company: Option<&str>) -> AppResult<Vec<(NaiveDate, i64)>> {
    let mut sql = String::from(
        "SELECT substr(r.start_ts, 1, 10) AS day, SUM(r.duration)
         FROM records r
         JOIN companies c ON c.id = r.company_id
         WHERE r.end_ts IS NOT NULL",
    );
    let pattern = company.map(|c| format!("%{}%", c));
    if pattern.is_some() {
        sql.push_str(" AND c.name LIKE ?1");
    }
    sql.push_str(" GROUP BY day ORDER BY day ASC");

    let map = |row: &Row| -> rusqlite::Result<(NaiveDate, i64)> {
        let day: String = row.get(0)?;
        let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .map_err(|_| conversion_error(0, AppError::InvalidDate(day.clone())))?;
        Ok((date, row.get::<_, Option<i64>>(1)?.unwrap_or(0)))
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = match &pattern {
        Some(p) => stmt.query_map([p], map)?.collect::<rusqlite::Result<Vec<_>>>()?,
        None => stmt.query_map([], map)?.collect::<rusqlite::Result<Vec<_>>>()?,
    };
    Ok(rows)
}

/// All records of one company (finished or not) starting in `[start, end)`.
pub fn company_records_in_range(
    conn: &Connection,
    company_id: i64,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<Vec<TimeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT r.id, r.company_id, c.name, r.start_ts, r.end_ts, r.duration
         FROM records r
         JOIN companies c ON c.id = r.company_id
         WHERE r.company_id = ?1 AND r.start_ts >= ?2 AND r.start_ts < ?3
         ORDER BY r.start_ts ASC",
    )?;

    let rows = stmt.query_map(
        params![company_id, format_timestamp(start), format_timestamp(end)],
        map_record,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
