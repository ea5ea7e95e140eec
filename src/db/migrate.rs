use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
/// It doubles as the migration ledger: applied migrations are recorded here.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `work_log` table: one row per calendar date, at most.
/// A day with no row has no record; the reports must never fabricate one.
fn create_work_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_log (
            date          TEXT PRIMARY KEY,
            start_time    TEXT,
            end_time      TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            notes         TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_overtime_carryover_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS overtime_carryover (
            year    INTEGER PRIMARY KEY,
            minutes INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_leave_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS leave_balance (
            year                    INTEGER PRIMARY KEY,
            base_days               REAL NOT NULL DEFAULT 25,
            purchased_days          REAL NOT NULL DEFAULT 0,
            carry_over_hours        REAL NOT NULL DEFAULT 0,
            manual_adjustment_hours REAL NOT NULL DEFAULT 0,
            hours_per_day           REAL NOT NULL DEFAULT 8
        );

        CREATE TABLE IF NOT EXISTS leave_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            hours       REAL NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_leave_entries_date ON leave_entries(date);
        "#,
    )?;
    Ok(())
}

/// Migration: early databases stored work_log without the notes column.
fn migrate_add_notes_to_work_log(conn: &Connection) -> Result<(), Error> {
    let version = "20250418_0003_add_notes_to_work_log";

    // 1. Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !table_exists(conn, "work_log")? || table_has_column(conn, "work_log", "notes")? {
        return Ok(());
    }

    warning("Adding 'notes' column to work_log table...");

    conn.execute(
        "ALTER TABLE work_log ADD COLUMN notes TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // 2. Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notes to work_log')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notes' to work_log table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1. Ensure log table
    ensure_log_table(conn)?;

    // 2. Base schema
    let had_work_log = table_exists(conn, "work_log")?;

    create_work_log_table(conn)?;
    create_overtime_carryover_table(conn)?;
    create_leave_tables(conn)?;

    if !had_work_log {
        success("Created work ledger tables (modern schema).");
    }

    // 3. Column-level upgrades for pre-existing databases
    migrate_add_notes_to_work_log(conn)?;

    Ok(())
}
