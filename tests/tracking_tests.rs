use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rti, setup_test_db};

#[test]
fn test_start_status_stop_cycle() {
    let db_path = setup_test_db("start_status_stop");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rti()
        .args(["--db", &db_path, "start", "Acme"])
        .assert()
        .success()
        .stdout(contains("Session started for 'Acme'"));

    rti()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Active session for 'Acme'"))
        .stdout(contains("Elapsed"));

    rti()
        .args(["--db", &db_path, "stop"])
        .assert()
        .success()
        .stdout(contains("Session stopped for 'Acme'"))
        .stdout(contains("Duration"));

    rti()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No active session."));

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Acme"))
        .stdout(contains("Total:"));
}

#[test]
fn test_second_start_is_rejected() {
    let db_path = setup_test_db("second_start_rejected");

    rti()
        .args(["--db", &db_path, "start", "Acme"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "start", "Globex"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("already active for 'Acme'"));

    rti()
        .args(["--db", &db_path, "stop"])
        .assert()
        .success();
}

#[test]
fn test_stop_without_session_fails() {
    let db_path = setup_test_db("stop_without_session");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "stop"])
        .assert()
        .failure()
        .stderr(contains("no active session"));
}

#[test]
fn test_show_filters() {
    let db_path = setup_test_db("show_filters");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "show", "--company", "Glob"])
        .assert()
        .success()
        .stdout(contains("Globex Corp"))
        .stdout(contains("Acme").not())
        .stdout(contains("03:00:00"));

    rti()
        .args(["--db", &db_path, "show", "--from", "2024-03-02"])
        .assert()
        .success()
        .stdout(contains("04/03/2024 13:00:00"))
        .stdout(contains("01/03/2024").not());

    rti()
        .args(["--db", &db_path, "show", "--to", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("01/03/2024 09:00:00"))
        .stdout(contains("Total: 08:00:00"));
}

#[test]
fn test_show_rejects_bad_date() {
    let db_path = setup_test_db("show_bad_date");

    rti()
        .args(["--db", &db_path, "show", "--from", "03/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_empty_database_messages() {
    let db_path = setup_test_db("empty_messages");

    rti()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No records found."));

    rti()
        .args(["--db", &db_path, "balance"])
        .assert()
        .success()
        .stdout(contains("No records found to compute a balance."));
}

#[test]
fn test_balance_per_day() {
    let db_path = setup_test_db("balance_per_day");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "balance", "--goal", "8h"])
        .assert()
        .success()
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-03-04"))
        .stdout(contains("05:00:00"))
        .stdout(contains("-03:00:00"))
        .stdout(contains("Total"));

    rti()
        .args(["--db", &db_path, "balance", "--company", "Acme", "--goal", "450m"])
        .assert()
        .success()
        .stdout(contains("07:30:00"))
        .stdout(contains("02:00:00"));
}

#[test]
fn test_balance_rejects_bad_goal() {
    let db_path = setup_test_db("balance_bad_goal");

    rti()
        .args(["--db", &db_path, "balance", "--goal", "eight"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_operations");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    rti()
        .args(["--db", &db_path, "start", "Initech"])
        .assert()
        .success();
    rti()
        .args(["--db", &db_path, "stop"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("(Initech)"))
        .stdout(contains("Session stopped after"));
}

#[test]
fn test_db_maintenance() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Vacuum completed."));

    rti()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()));
}

#[test]
fn test_config_print_uses_db_override() {
    let db_path = setup_test_db("config_print");

    rti()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("daily_goal"))
        .stdout(contains(db_path.as_str()));
}
