use chrono::Duration;
use timetracker::core::report::ReportLogic;
use timetracker::core::track::TrackLogic;
use timetracker::db::pool::DbPool;
use timetracker::db::queries::{RecordFilter, list_records};
use timetracker::db::repository::{SqliteRepository, TimeRepository};
use timetracker::errors::AppError;
use timetracker::export::logic::default_export_path;
use timetracker::export::ExportFormat;
use timetracker::core::calculator::aggregate::MonthAggregate;
use timetracker::core::calculator::month::MonthRef;
use timetracker::core::calculator::summary::MonthlySummary;
use timetracker::ui::messages::{Level, status_line};
use timetracker::utils::colors::{GREEN, RED, RESET, colorize_balance};
use timetracker::utils::date::parse_month_year;
use timetracker::utils::format_duration;
use timetracker::utils::time::{MAX_GOAL_SECS, parse_goal, parse_timestamp};

mod common;
use common::{date, seed_record, setup_test_db, ts};

#[test]
fn test_format_duration_components() {
    assert_eq!(format_duration(0), "00:00:00");
    assert_eq!(format_duration(59), "00:00:59");
    assert_eq!(format_duration(3661), "01:01:01");
    assert_eq!(format_duration(28800), "08:00:00");
    assert_eq!(format_duration(360_000), "100:00:00");
    assert_eq!(format_duration(-5), "00:00:00");

    for s in [1_i64, 61, 3599, 86_399, 123_456] {
        let text = format_duration(s);
        let parts: Vec<i64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], s);
        assert!(parts[1] < 60 && parts[2] < 60);
    }
}

#[test]
fn test_goal_and_month_parsing() {
    assert_eq!(parse_goal("8h").unwrap(), 28800);
    assert_eq!(parse_goal("7h30m").unwrap(), 27000);
    assert_eq!(parse_goal("450m").unwrap(), 27000);
    assert_eq!(parse_goal("7.5").unwrap(), 27000);
    assert!(matches!(parse_goal("soon"), Err(AppError::InvalidDuration(_))));

    assert_eq!(parse_month_year("03/24").unwrap(), date(2024, 3, 1));
    assert_eq!(parse_month_year("11/2025").unwrap(), date(2025, 11, 1));
    assert!(matches!(parse_month_year("2024-03"), Err(AppError::InvalidMonth(_))));

    assert_eq!(
        parse_timestamp("2024-03-01 09:00:00").unwrap(),
        ts("2024-03-01", "09:00")
    );
}

#[test]
fn test_track_logic_single_active_session() {
    let pool = DbPool::in_memory().unwrap();
    let start = ts("2024-03-01", "09:00");

    let active = TrackLogic::start(&pool, "  Acme ", start).unwrap();
    assert_eq!(active.company, "Acme");

    let err = TrackLogic::start(&pool, "Globex", start + Duration::minutes(5)).unwrap_err();
    assert!(matches!(err, AppError::SessionAlreadyActive { ref company, .. } if company == "Acme"));

    let stopped = TrackLogic::stop(&pool, start + Duration::hours(2)).unwrap();
    assert_eq!(stopped.duration, 7200);
    assert!(TrackLogic::status(&pool).unwrap().is_none());
    assert!(matches!(
        TrackLogic::stop(&pool, start + Duration::hours(3)),
        Err(AppError::NoActiveSession)
    ));

    assert!(TrackLogic::start(&pool, "   ", start).is_err());
}

#[test]
fn test_stop_before_start_clamps_to_zero() {
    let pool = DbPool::in_memory().unwrap();
    let start = ts("2024-03-01", "09:00");

    TrackLogic::start(&pool, "Acme", start).unwrap();
    let stopped = TrackLogic::stop(&pool, start - Duration::minutes(10)).unwrap();
    assert_eq!(stopped.duration, 0);
}

#[test]
fn test_render_records_total() {
    let pool = DbPool::in_memory().unwrap();
    let start = ts("2024-03-01", "09:00");
    TrackLogic::start(&pool, "Acme", start).unwrap();
    TrackLogic::stop(&pool, start + Duration::minutes(90)).unwrap();

    let records = list_records(&pool.conn, &RecordFilter::default()).unwrap();
    let (text, total) = ReportLogic::render_records(&records, '=');
    assert_eq!(total, 5400);
    assert!(text.contains("COMPANY"));
    assert!(text.contains("Total: 01:30:00"));
}

#[test]
fn test_balance_from_days() {
    let days = vec![(date(2024, 3, 1), 9 * 3600), (date(2024, 3, 2), 6 * 3600)];
    let report = ReportLogic::balance_from_days(&days, 8 * 3600);

    assert_eq!(report.rows[0].balance, 3600);
    assert_eq!(report.rows[1].balance, -7200);
    assert_eq!(report.total_balance, -3600);
}

#[test]
fn test_sqlite_repository_reads_completed_records_only() {
    let db_path = setup_test_db("repository_completed_only");
    seed_record(&db_path, "Acme", "2024-03-01", "09:00", "17:00");
    seed_record(&db_path, "Acme", "2024-03-01", "18:00", "19:00");
    seed_record(&db_path, "Globex", "2024-04-01", "09:00", "10:00");

    {
        let pool = DbPool::new(&db_path).unwrap();
        TrackLogic::start(&pool, "Initech", ts("2024-03-05", "08:00")).unwrap();
    }

    let repo = SqliteRepository::new(db_path.clone());
    let (start, end) = MonthRef::new(2024, 3).unwrap().bounds();
    let rows = repo.records_in_range(start, end).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].day, 1);
    assert_eq!(rows[0].company, "Acme");
    assert_eq!(rows[0].seconds, 9 * 3600);

    let active = repo.active_session().unwrap().expect("active session");
    assert_eq!(active.company, "Initech");
}

#[test]
fn test_default_export_path() {
    let month = MonthRef::new(2024, 3).unwrap();
    let path = default_export_path(
        std::path::Path::new("/tmp/exports"),
        "Globex Corp",
        &month,
        ExportFormat::Xlsx,
    );
    assert!(path.ends_with("Globex_Corp_03_2024.xlsx"));
}

#[test]
fn test_goal_overflow_is_rejected() {
    for input in ["2562047788015216h", "1e18", "25h", "24h1m", "1441m", "nan", "inf", "-1"] {
        assert!(
            matches!(parse_goal(input), Err(AppError::InvalidDuration(_))),
            "goal {input} should be rejected"
        );
    }
    assert_eq!(parse_goal("24h").unwrap(), MAX_GOAL_SECS);
    assert_eq!(parse_goal("24").unwrap(), MAX_GOAL_SECS);
}

#[test]
fn test_summary_goal_saturates_instead_of_overflowing() {
    let month = MonthRef::new(2024, 3).unwrap();
    let summary = MonthlySummary::compute(&MonthAggregate::default(), &month, i64::MAX);

    assert_eq!(summary.goal_secs, i64::MAX);
    assert_eq!(summary.variance_secs, -i64::MAX);
}

#[test]
fn test_export_format_names() {
    assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
    assert_eq!(ExportFormat::Json.label(), "JSON");
    assert_eq!(ExportFormat::Csv.to_string(), "csv");
}

#[test]
fn test_status_lines_and_balance_colors() {
    let line = status_line(Level::Warning, "disk almost full");
    assert!(line.contains("⚠️"));
    assert!(line.ends_with(" disk almost full"));

    assert_eq!(colorize_balance("+01:00:00", 3600), format!("{GREEN}+01:00:00{RESET}"));
    assert_eq!(colorize_balance("-01:00:00", -3600), format!("{RED}-01:00:00{RESET}"));
    assert_eq!(colorize_balance("00:00:00", 0), format!("{RESET}00:00:00{RESET}"));
}
