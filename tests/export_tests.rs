use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, wl};

#[test]
fn test_export_csv_contains_computed_minutes() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");

    // serde header from the export model
    assert!(content.starts_with("date,start_time,end_time,break_minutes,worked_minutes,notes"));
    // Monday: 9h minus 30 min break
    assert!(content.contains("2026-03-02,09:00,18:00,30,510,"));
    // Friday: 4h, no break
    assert!(content.contains("2026-03-06,08:00,12:00,0,240,"));
}

#[test]
fn test_export_json_pretty() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    wl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2026-03-02");
    assert_eq!(rows[0]["worked_minutes"], 510);
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_data(&db_path);

    wl().args([
        "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_range_filters_entries() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_db_with_data(&db_path);

    wl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "2026-03-06:2026-03-31",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2026-03-06"));
    assert!(!content.contains("2026-03-02"));
}

#[test]
fn test_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relpath");
    init_db_with_data(&db_path);

    wl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "stale").expect("create stale file");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "-f",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,"));
}
