#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use timetracker::db::pool::DbPool;
use timetracker::db::queries::{get_or_create_company, insert_completed};
use timetracker::db::repository::TimeRepository;
use timetracker::errors::AppResult;
use timetracker::models::day_entry::DayEntry;
use timetracker::models::session::ActiveSession;

pub fn rti() -> Command {
    cargo_bin_cmd!("timetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
        .expect("valid test timestamp")
}

/// Insert a finished record through the library API.
pub fn seed_record(db_path: &str, company: &str, date: &str, from: &str, to: &str) {
    let pool = DbPool::new(db_path).expect("open db");
    let id = get_or_create_company(&pool.conn, company).expect("company");
    insert_completed(&pool.conn, id, &ts(date, from), &ts(date, to)).expect("insert record");
}

/// Initialize DB and add the Acme / Globex dataset used by several tests
pub fn init_db_with_data(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    seed_record(db_path, "Acme", "2024-03-01", "09:00", "17:00");
    seed_record(db_path, "Globex Corp", "2024-03-04", "09:00", "12:00");
    seed_record(db_path, "Acme", "2024-03-04", "13:00", "15:00");
}

/// Offset (in months) from the current month to `year`/`month`.
pub fn month_offset(year: i32, month: u32) -> i32 {
    use chrono::Datelike;
    let today = chrono::Local::now().date_naive();
    (year - today.year()) * 12 + month as i32 - today.month() as i32
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// In-memory repository returning canned rows.
#[derive(Default)]
pub struct FakeRepo {
    pub entries: Vec<DayEntry>,
    pub active: Option<ActiveSession>,
}

impl FakeRepo {
    pub fn with_entries(entries: Vec<DayEntry>) -> Self {
        Self {
            entries,
            active: None,
        }
    }
}

impl TimeRepository for FakeRepo {
    fn records_in_range(
        &self,
        _start: NaiveDateTime,
        _end: NaiveDateTime,
    ) -> AppResult<Vec<DayEntry>> {
        Ok(self.entries.clone())
    }

    fn active_session(&self) -> AppResult<Option<ActiveSession>> {
        Ok(self.active.clone())
    }
}
