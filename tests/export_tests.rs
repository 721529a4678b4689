use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_export_csv_for_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_month", "csv");

    rti()
        .args([
            "--db", &db_path, "export", "Acme", "--month", "03/24", "--format", "csv", "--file",
            &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 2 records written to"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,company,start_date,start_time,end_date,end_time,duration_minutes,duration")
    );
    assert!(content.contains("Acme,2024-03-01,09:00:00,2024-03-01,17:00:00,480,08:00:00"));
    assert!(content.contains("Acme,2024-03-04,13:00:00,2024-03-04,15:00:00,120,02:00:00"));
    assert!(!content.contains("Globex"));
}

#[test]
fn test_export_json_for_month() {
    let db_path = setup_test_db("export_json_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_month", "json");

    rti()
        .args([
            "--db", &db_path, "export", "Globex Corp", "--month", "03/2024", "--format", "json",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["company"], "Globex Corp");
    assert_eq!(rows[0]["duration_minutes"], 180);
    assert_eq!(rows[0]["start_time"], "09:00:00");
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_xlsx_month", "xlsx");

    rti()
        .args([
            "--db", &db_path, "export", "Acme", "--month", "03/24", "--format", "xlsx", "--file",
            &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_unknown_company_fails() {
    let db_path = setup_test_db("export_unknown_company");
    init_db_with_data(&db_path);
    let out = temp_out("export_unknown_company", "csv");

    rti()
        .args(["--db", &db_path, "export", "Umbrella", "--month", "03/24", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Company not found: Umbrella"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let db_path = setup_test_db("export_empty_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty_month", "csv");

    rti()
        .args(["--db", &db_path, "export", "Acme", "--month", "04/24", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No records found for 'Acme' in April 2024."))
        .stdout(contains("export completed").not());

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_rejects_bad_month() {
    let db_path = setup_test_db("export_bad_month");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "export", "Acme", "--month", "13/24"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_export_existing_file_declined() {
    let db_path = setup_test_db("export_existing_declined");
    init_db_with_data(&db_path);
    let out = temp_out("export_existing_declined", "csv");
    fs::write(&out, "keep me").expect("write placeholder");

    rti()
        .args(["--db", &db_path, "export", "Acme", "--month", "03/24", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}
