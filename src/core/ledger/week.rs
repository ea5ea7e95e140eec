use crate::core::ledger::day::{DayReport, day_report};
use crate::core::ledger::norm::NormPolicy;
use crate::models::work_entry::WorkLogEntry;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Weekly aggregate over the Monday–Friday slice of one ISO week.
///
/// `total_norm` counts all five weekdays whether or not they carry data:
/// a missing day is not exempt from its norm. `total_worked` and `delta`
/// are `None` only when no day of the week is recorded at all.
#[derive(Debug, Clone)]
pub struct WeekReport {
    pub iso_year: i32,
    pub week: u32,
    pub days: Vec<DayReport>,
    pub total_norm: i64,
    pub total_worked: Option<i64>,
    pub delta: Option<i64>,
}

impl WeekReport {
    pub fn has_entries(&self) -> bool {
        self.total_worked.is_some()
    }
}

/// Aggregate the given weekdays (callers pass the Mon–Fri dates of a single
/// ISO week, ascending) against the entry map.
pub fn week_report(
    iso_year: i32,
    week: u32,
    weekdays: &[NaiveDate],
    entries: &HashMap<NaiveDate, WorkLogEntry>,
    policy: &NormPolicy,
) -> WeekReport {
    let days: Vec<DayReport> = weekdays
        .iter()
        .map(|d| day_report(*d, entries.get(d), policy))
        .collect();

    let total_norm = days.iter().map(|d| d.norm_minutes).sum();

    let recorded: Vec<i64> = days.iter().filter_map(|d| d.worked_minutes).collect();
    let total_worked = if recorded.is_empty() {
        None
    } else {
        Some(recorded.iter().sum())
    };

    WeekReport {
        iso_year,
        week,
        days,
        total_norm,
        total_worked,
        delta: total_worked.map(|w| w - total_norm),
    }
}
