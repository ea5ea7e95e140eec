use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, wl};

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src_len = fs::metadata(&db_path).expect("source db").len();
    let dst_len = fs::metadata(&out).expect("backup file").len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_backup_compress_creates_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // the plain copy is removed once the archive is in place
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing");
    let out = temp_out("backup_missing", "sqlite");

    wl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
