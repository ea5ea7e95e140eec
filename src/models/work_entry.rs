use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One work log record per calendar date, at most.
///
/// "No entry for a day" is represented by absence from the store, never by a
/// zero-filled row: downstream reports distinguish "no data yet" from
/// "worked exactly the norm".
#[derive(Debug, Clone, Serialize)]
pub struct WorkLogEntry {
    pub date: NaiveDate,          // ⇔ work_log.date (TEXT "YYYY-MM-DD", PK)
    pub start: Option<NaiveTime>, // ⇔ work_log.start_time (TEXT "HH:MM", NULL)
    pub end: Option<NaiveTime>,   // ⇔ work_log.end_time (TEXT "HH:MM", NULL)
    pub break_minutes: i64,       // ⇔ work_log.break_minutes (INT, default 0)
    pub notes: String,            // ⇔ work_log.notes (TEXT, default '')

    pub created_at: String, // ⇔ work_log.created_at (TEXT, ISO8601)
    pub updated_at: String, // ⇔ work_log.updated_at (TEXT, ISO8601)
}

impl WorkLogEntry {
    pub fn new(
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        break_minutes: i64,
        notes: String,
    ) -> Self {
        let now = chrono::Local::now().to_rfc3339();
        Self {
            date,
            start,
            end,
            break_minutes,
            notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> Option<String> {
        self.start.map(|t| t.format("%H:%M").to_string())
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(|t| t.format("%H:%M").to_string())
    }

    /// A day counts as recorded only when it carries a clock time. Entries
    /// holding nothing but notes or a break do not move any aggregate.
    pub fn has_times(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}
