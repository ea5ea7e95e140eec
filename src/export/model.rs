use crate::models::work_entry::WorkLogEntry;
use crate::utils::time::worked_minutes;
use serde::Serialize;

/// Flat per-day row for export. Worked minutes are precomputed so the file
/// is useful without re-running the ledger.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i64,
    pub worked_minutes: i64,
    pub notes: String,
}

impl From<&WorkLogEntry> for EntryExport {
    fn from(e: &WorkLogEntry) -> Self {
        Self {
            date: e.date_str(),
            start_time: e.start_str().unwrap_or_default(),
            end_time: e.end_str().unwrap_or_default(),
            break_minutes: e.break_minutes,
            worked_minutes: worked_minutes(e.start, e.end, e.break_minutes),
            notes: e.notes.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "start_time",
        "end_time",
        "break_minutes",
        "worked_minutes",
        "notes",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.break_minutes.to_string(),
        e.worked_minutes.to_string(),
        e.notes.clone(),
    ]
}
