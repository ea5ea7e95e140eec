use predicates::str::contains;

mod common;
use common::{setup_test_db, wl};

#[test]
fn test_leave_stats_with_defaults() {
    let db_path = setup_test_db("leave_defaults");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "stats", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("no balance stored"))
        .stdout(contains("Entitlement: 25 days (200 h)"))
        .stdout(contains("Taken:       0 days (0 h)"))
        .stdout(contains("Remaining:   25 days (200 h)"));
}

#[test]
fn test_leave_full_flow() {
    let db_path = setup_test_db("leave_flow");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "leave",
        "set",
        "--year",
        "2026",
        "--base-days",
        "25",
        "--purchased-days",
        "5",
        "--carry-over-hours",
        "4",
        "--adjustment-hours",
        "-2",
    ])
    .assert()
    .success()
    .stdout(contains("Leave balance for 2026"));

    wl().args([
        "--db",
        &db_path,
        "leave",
        "add",
        "2026-07-20",
        "8",
        "--description",
        "summer day",
    ])
    .assert()
    .success()
    .stdout(contains("Logged 8 leave hours on 2026-07-20."));

    wl().args(["--db", &db_path, "leave", "add", "2026-07-21", "4"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "list", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("2026-07-20"))
        .stdout(contains("summer day"))
        .stdout(contains("2026-07-21"));

    // 30 days entitlement, 242h total, 12h taken → 230h / 28.75 days left
    wl().args(["--db", &db_path, "leave", "stats", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("Entitlement: 30 days (242 h)"))
        .stdout(contains("Taken:       1.5 days (12 h)"))
        .stdout(contains("Remaining:   28.75 days (230 h)"));
}

#[test]
fn test_leave_set_updates_only_given_fields() {
    let db_path = setup_test_db("leave_partial_set");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "leave",
        "set",
        "--year",
        "2026",
        "--base-days",
        "20",
    ])
    .assert()
    .success();

    // second set touches only purchased days; base days must survive
    wl().args([
        "--db",
        &db_path,
        "leave",
        "set",
        "--year",
        "2026",
        "--purchased-days",
        "2",
    ])
    .assert()
    .success();

    wl().args(["--db", &db_path, "leave", "stats", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("Entitlement: 22 days (176 h)"));
}

#[test]
fn test_leave_del_removes_entry() {
    let db_path = setup_test_db("leave_del");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "add", "2026-04-01", "8"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted leave entry 1"));

    wl().args(["--db", &db_path, "leave", "stats", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("Taken:       0 days (0 h)"));
}

#[test]
fn test_leave_del_nonexistent_fails() {
    let db_path = setup_test_db("leave_del_missing");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "del", "99"])
        .assert()
        .failure()
        .stderr(contains("No leave entry found with id 99"));
}

#[test]
fn test_leave_set_rejects_nonpositive_hours_per_day() {
    let db_path = setup_test_db("leave_bad_hpd");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "leave",
        "set",
        "--year",
        "2026",
        "--hours-per-day",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("hours-per-day must be positive"));
}

#[test]
fn test_leave_add_rejects_nonpositive_hours() {
    let db_path = setup_test_db("leave_bad_hours");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "leave", "add", "2026-04-01", "-1"])
        .assert()
        .failure()
        .stderr(contains("Leave hours must be positive"));
}
