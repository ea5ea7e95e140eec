use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::carry_over::CarryOver;
use crate::models::leave::{LeaveBalance, LeaveEntry};
use crate::models::work_entry::WorkLogEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// work_log
// ---------------------------

pub fn map_work_log_row(row: &Row) -> Result<WorkLogEntry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start = parse_time_column(row, "start_time")?;
    let end = parse_time_column(row, "end_time")?;

    Ok(WorkLogEntry {
        date,
        start,
        end,
        break_minutes: row.get("break_minutes")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_time_column(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(col)?;

    match raw {
        None => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTime(s.clone())),
                )
            }),
    }
}

pub fn get_entry(conn: &Connection, date: &NaiveDate) -> AppResult<Option<WorkLogEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM work_log WHERE date = ?1")?;

    let entry = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_work_log_row)
        .optional()?;

    Ok(entry)
}

/// Load all entries in the inclusive date range, ascending by date.
pub fn load_entries_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<WorkLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_log
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        [
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_work_log_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_for_year(pool: &mut DbPool, year: i32) -> AppResult<Vec<WorkLogEntry>> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::InvalidYear(year.to_string()))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| AppError::InvalidYear(year.to_string()))?;

    load_entries_between(pool, &first, &last)
}

/// Insert or update the single row for the entry's date. Last write wins.
pub fn upsert_entry(conn: &Connection, entry: &WorkLogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_log (date, start_time, end_time, break_minutes, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(date) DO UPDATE SET
             start_time    = excluded.start_time,
             end_time      = excluded.end_time,
             break_minutes = excluded.break_minutes,
             notes         = excluded.notes,
             updated_at    = excluded.updated_at",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes,
            entry.notes,
            entry.created_at,
            entry.updated_at,
        ],
    )?;
    Ok(())
}

/// Delete the entry for a date; returns the number of rows removed (0 or 1).
pub fn delete_entry(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM work_log WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

// ---------------------------
// overtime_carryover
// ---------------------------

pub fn get_carry_over(conn: &Connection, year: i32) -> AppResult<Option<CarryOver>> {
    let mut stmt = conn.prepare("SELECT year, minutes FROM overtime_carryover WHERE year = ?1")?;

    let row = stmt
        .query_row([year], |row| {
            Ok(CarryOver {
                year: row.get(0)?,
                minutes: row.get(1)?,
            })
        })
        .optional()?;

    Ok(row)
}

pub fn upsert_carry_over(conn: &Connection, carry: &CarryOver) -> AppResult<()> {
    conn.execute(
        "INSERT INTO overtime_carryover (year, minutes)
         VALUES (?1, ?2)
         ON CONFLICT(year) DO UPDATE SET minutes = excluded.minutes",
        params![carry.year, carry.minutes],
    )?;
    Ok(())
}

// ---------------------------
// leave_balance / leave_entries
// ---------------------------

pub fn get_leave_balance(conn: &Connection, year: i32) -> AppResult<Option<LeaveBalance>> {
    let mut stmt = conn.prepare(
        "SELECT year, base_days, purchased_days, carry_over_hours,
                manual_adjustment_hours, hours_per_day
         FROM leave_balance WHERE year = ?1",
    )?;

    let row = stmt
        .query_row([year], |row| {
            Ok(LeaveBalance {
                year: row.get(0)?,
                base_days: row.get(1)?,
                purchased_days: row.get(2)?,
                carry_over_hours: row.get(3)?,
                manual_adjustment_hours: row.get(4)?,
                hours_per_day: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

pub fn upsert_leave_balance(conn: &Connection, balance: &LeaveBalance) -> AppResult<()> {
    conn.execute(
        "INSERT INTO leave_balance
             (year, base_days, purchased_days, carry_over_hours,
              manual_adjustment_hours, hours_per_day)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(year) DO UPDATE SET
             base_days               = excluded.base_days,
             purchased_days          = excluded.purchased_days,
             carry_over_hours        = excluded.carry_over_hours,
             manual_adjustment_hours = excluded.manual_adjustment_hours,
             hours_per_day           = excluded.hours_per_day",
        params![
            balance.year,
            balance.base_days,
            balance.purchased_days,
            balance.carry_over_hours,
            balance.manual_adjustment_hours,
            balance.hours_per_day,
        ],
    )?;
    Ok(())
}

pub fn map_leave_entry_row(row: &Row) -> Result<LeaveEntry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(LeaveEntry {
        id: row.get("id")?,
        date,
        hours: row.get("hours")?,
        description: row.get("description")?,
    })
}

pub fn insert_leave_entry(conn: &Connection, entry: &LeaveEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO leave_entries (date, hours, description)
         VALUES (?1, ?2, ?3)",
        params![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.hours,
            entry.description,
        ],
    )?;
    Ok(())
}

/// All leave entries falling inside the calendar year, ascending by date.
pub fn load_leave_entries(pool: &mut DbPool, year: i32) -> AppResult<Vec<LeaveEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM leave_entries
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        [format!("{year}-01-01"), format!("{year}-12-31")],
        map_leave_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_leave_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM leave_entries WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------
// helpers shared by reports
// ---------------------------

/// Entries keyed by date, as consumed by the ledger engines.
pub fn entries_by_date(
    entries: Vec<WorkLogEntry>,
) -> std::collections::HashMap<NaiveDate, WorkLogEntry> {
    entries.into_iter().map(|e| (e.date, e)).collect()
}

/// Carry-over lookup that tolerates an absent row.
pub fn carry_over_minutes_or_zero(conn: &Connection, year: i32) -> AppResult<i64> {
    Ok(get_carry_over(conn, year)?.map(|c| c.minutes).unwrap_or(0))
}
