use predicates::str::contains;
use timetracker::core::calculator::aggregate::{MonthAggregate, aggregate_month};
use timetracker::core::calculator::month::MonthRef;
use timetracker::core::calculator::summary::{
    DEFAULT_DAILY_GOAL_SECS, DayClass, MonthlySummary, rank_day,
};
use timetracker::core::logic::Core;
use timetracker::models::day_entry::DayEntry;
use timetracker::tui::calendar::{CellLine, abbreviation, cell_lines, render_calendar};
use timetracker::tui::palette::{COMPANY_PALETTE, company_color, palette_index};
use timetracker::tui::render_calendar_text;

mod common;
use common::{FakeRepo, date, init_db_with_data, month_offset, rti, setup_test_db};

const H: i64 = 3600;

fn march_2024() -> MonthRef {
    MonthRef::new(2024, 3).expect("march")
}

#[test]
fn test_classification_boundaries() {
    assert_eq!(DayClass::classify(28800), DayClass::Full);
    assert_eq!(DayClass::classify(28799), DayClass::Partial);
    assert_eq!(DayClass::classify(14400), DayClass::Partial);
    assert_eq!(DayClass::classify(14399), DayClass::Low);
    assert_eq!(DayClass::classify(1), DayClass::Low);
    assert_eq!(DayClass::classify(0), DayClass::None);
}

#[test]
fn test_business_days_depend_on_calendar_only() {
    // January 2025: 31 days starting on a Wednesday.
    let jan = MonthRef::new(2025, 1).unwrap();
    assert_eq!(jan.business_days(), 23);
    assert_eq!(march_2024().business_days(), 21);
    assert_eq!(MonthRef::new(2024, 2).unwrap().days_in_month(), 29);
}

#[test]
fn test_month_offsets_and_weeks() {
    let base = date(2024, 1, 15);
    let prev = MonthRef::from_offset(base, -1).unwrap();
    assert_eq!((prev.year(), prev.month()), (2023, 12));
    let next = MonthRef::from_offset(base, 13).unwrap();
    assert_eq!((next.year(), next.month()), (2025, 2));

    let weeks = march_2024().weeks();
    // March 1st 2024 is a Friday.
    assert_eq!(weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
    assert_eq!(weeks.last().unwrap()[6], Some(31));
    assert_eq!(march_2024().title(), "MARCH 2024");
}

#[test]
fn test_aggregation_sums_and_keeps_discovery_order() {
    let agg = MonthAggregate::from_entries(vec![
        DayEntry::new(1, "Initech", 2 * H),
        DayEntry::new(1, "Acme", H),
        DayEntry::new(2, "Acme", 3 * H),
        DayEntry::new(2, "Acme", 600),
        DayEntry::new(5, "Globex", 1800),
    ]);

    assert_eq!(agg.companies(), ["Initech", "Acme", "Globex"]);
    assert_eq!(agg.day_total(2), 3 * H + 600);
    assert_eq!(agg.day(2).len(), 1);
    assert!(agg.day(3).is_empty());

    let summary = MonthlySummary::compute(&agg, &march_2024(), DEFAULT_DAILY_GOAL_SECS);
    let company_sum: i64 = summary.companies.iter().map(|c| c.total_secs).sum();
    assert_eq!(company_sum, summary.total_secs);
    assert_eq!(summary.total_secs, agg.total_seconds());
    assert_eq!(summary.worked_days, 3);
}

#[test]
fn test_summary_sort_is_stable_on_ties() {
    let agg = MonthAggregate::from_entries(vec![
        DayEntry::new(1, "Beta", H),
        DayEntry::new(1, "Alpha", H),
        DayEntry::new(2, "Gamma", 2 * H),
    ]);
    let summary = MonthlySummary::compute(&agg, &march_2024(), DEFAULT_DAILY_GOAL_SECS);

    let names: Vec<&str> = summary.companies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Gamma", "Beta", "Alpha"]);
    assert_eq!(summary.companies[1].discovery_index, 0);
}

#[test]
fn test_single_full_day_summary() {
    let repo = FakeRepo::with_entries(vec![DayEntry::new(1, "Acme", 8 * H)]);
    let view = Core::build_month_view(&repo, march_2024(), DEFAULT_DAILY_GOAL_SECS).unwrap();

    assert_eq!(DayClass::classify(view.aggregate.day_total(1)), DayClass::Full);

    let acme = &view.summary.companies[0];
    assert_eq!(acme.active_days, 1);
    assert!((acme.average_hours() - 8.0).abs() < 1e-9);
    assert!((acme.share_pct(view.summary.total_secs) - 100.0).abs() < 1e-9);
    assert_eq!(view.summary.goal_secs, 21 * 8 * H);
    assert_eq!(view.summary.variance_secs, 8 * H - 21 * 8 * H);
}

#[test]
fn test_empty_month_variance_is_negative_goal() {
    let repo = FakeRepo::default();
    let month = march_2024();
    let agg = aggregate_month(&repo, &month).unwrap();
    let summary = MonthlySummary::compute(&agg, &month, DEFAULT_DAILY_GOAL_SECS);

    assert!(summary.is_empty());
    assert_eq!(summary.worked_days, 0);
    assert_eq!(summary.variance_secs, -(month.business_days() as i64 * 8 * H));
    assert_eq!(summary.worked_days_pct(), 0.0);
}

#[test]
fn test_rank_day_keeps_top_three() {
    let agg = MonthAggregate::from_entries(vec![
        DayEntry::new(7, "A", 100),
        DayEntry::new(7, "B", 500),
        DayEntry::new(7, "C", 300),
        DayEntry::new(7, "D", 300),
        DayEntry::new(7, "E", 50),
    ]);

    let ranking = rank_day(agg.day(7));
    let names: Vec<&str> = ranking.top.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(names, ["B", "C", "D"]);
    assert_eq!(ranking.overflow, 2);
}

#[test]
fn test_cell_shows_two_companies_and_overflow_line() {
    let agg = MonthAggregate::from_entries(vec![
        DayEntry::new(7, "A", 100),
        DayEntry::new(7, "B", 500),
        DayEntry::new(7, "C", 300),
        DayEntry::new(7, "D", 200),
    ]);

    let lines = cell_lines(agg.day(7));
    assert_eq!(lines.len(), 3);
    assert!(matches!(lines[0], CellLine::Company(cs) if cs.company == "B"));
    assert!(matches!(lines[1], CellLine::Company(cs) if cs.company == "C"));
    assert_eq!(lines[2], CellLine::More(2));

    let three = MonthAggregate::from_entries(vec![
        DayEntry::new(8, "A", 100),
        DayEntry::new(8, "B", 200),
        DayEntry::new(8, "C", 300),
    ]);
    assert!(
        cell_lines(three.day(8))
            .iter()
            .all(|l| matches!(l, CellLine::Company(_)))
    );
}

#[test]
fn test_abbreviations() {
    assert_eq!(abbreviation("Acme"), "AC");
    assert_eq!(abbreviation("globex corp"), "GC");
    assert_eq!(abbreviation("Very Big Company"), "VB");
    assert_eq!(abbreviation("X"), "X");
    assert_eq!(abbreviation("   "), "??");
}

#[test]
fn test_palette_wraps_after_six() {
    assert_eq!(palette_index(0), 0);
    assert_eq!(palette_index(5), 5);
    assert_eq!(palette_index(6), 0);
    assert_eq!(palette_index(13), 1);
    assert_eq!(company_color(7), COMPANY_PALETTE[1]);
}

#[test]
fn test_rendered_calendar_contents() {
    let repo = FakeRepo::with_entries(vec![
        DayEntry::new(1, "Acme", 8 * H),
        DayEntry::new(4, "Globex Corp", 3 * H),
        DayEntry::new(4, "Acme", 2 * H),
        DayEntry::new(12, "A", 60),
        DayEntry::new(12, "B", 120),
        DayEntry::new(12, "C", 180),
        DayEntry::new(12, "D", 240),
        DayEntry::new(12, "E", 300),
    ]);
    let view = Core::build_month_view(&repo, march_2024(), DEFAULT_DAILY_GOAL_SECS).unwrap();
    let text = render_calendar_text(&view, 84);

    assert!(text.contains("WORK CALENDAR - MARCH 2024"));
    assert!(text.contains("COMPANIES:"));
    assert!(text.contains("- Globex Corp"));
    assert!(text.contains("MON"));
    assert!(text.contains("SUN"));
    assert!(text.contains("01 (08:00)"));
    assert!(text.contains("04 (05:00)"));
    assert!(text.contains("GC 03:00"));
    assert!(text.contains("+3 more"));
    assert!(text.contains("MONTHLY SUMMARY:"));
    assert!(text.contains("TOTAL"));
    assert!(text.contains("ADDITIONAL STATISTICS:"));
    assert!(text.contains("Business days:"));
}

#[test]
fn test_rendered_calendar_without_sessions() {
    let view = Core::build_month_view(&FakeRepo::default(), march_2024(), DEFAULT_DAILY_GOAL_SECS)
        .unwrap();
    let text = render_calendar_text(&view, 84);

    assert_eq!(text.matches("No sessions recorded this month.").count(), 2);
    assert!(text.contains("-168.00h"));
    assert!(text.contains("0 (0.00%)"));
}

#[test]
fn test_canvas_is_at_least_terminal_height_and_cells_stay_wide() {
    let view = Core::build_month_view(&FakeRepo::default(), march_2024(), DEFAULT_DAILY_GOAL_SECS)
        .unwrap();

    let tall = render_calendar(&view, 84, 200);
    assert_eq!(tall.height(), 200);

    let narrow = render_calendar(&view, 20, 10);
    assert!(narrow.width() >= 42);
    assert!(narrow.height() > 10);
}

#[test]
fn test_calendar_print_from_database() {
    let db_path = setup_test_db("calendar_print");
    init_db_with_data(&db_path);

    let offset = month_offset(2024, 3).to_string();

    rti()
        .args(["--db", &db_path, "calendar", &offset, "--print"])
        .assert()
        .success()
        .stdout(contains("WORK CALENDAR - MARCH 2024"))
        .stdout(contains("01 (08:00)"))
        .stdout(contains("AC 08:00"))
        .stdout(contains("Globex Corp"))
        .stdout(contains("-155.00h"));
}
