use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, YELLOW, missing, paint};
use crate::utils::time::{format_duration, parse_timestamp};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", paint(CYAN, "• File:"), paint(YELLOW, db_path));
    println!("{} {:.2} MB", paint(CYAN, "• Size:"), file_mb);

    //
    // 2) COUNTS
    //
    let companies: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
    let records: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM records WHERE end_ts IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{} {}", paint(CYAN, "• Companies:"), paint(GREEN, companies));
    println!(
        "{} {} ({} active)",
        paint(CYAN, "• Records:"),
        paint(GREEN, records),
        open
    );

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(start_ts), MAX(start_ts) FROM records", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let fmt = |v: &Option<String>| {
        v.as_deref()
            .and_then(|s| parse_timestamp(s).ok())
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(missing)
    };

    println!("{}", paint(CYAN, "• Date range:"));
    println!("    from: {}", fmt(&first));
    println!("    to:   {}", fmt(&last));

    //
    // 4) TOTAL TRACKED
    //
    let total: Option<i64> = pool.conn.query_row(
        "SELECT SUM(duration) FROM records WHERE end_ts IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{} {}",
        paint(CYAN, "• Total tracked:"),
        format_duration(total.unwrap_or(0))
    );

    println!();
    Ok(())
}
