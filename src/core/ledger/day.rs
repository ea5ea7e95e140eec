use crate::core::ledger::norm::NormPolicy;
use crate::models::work_entry::WorkLogEntry;
use crate::utils::time::worked_minutes;
use chrono::NaiveDate;

/// Per-day view of the work-time ledger.
///
/// `worked` and `delta` are `None` for a day without a recorded clock time:
/// "no data yet" must stay distinguishable from "worked exactly the norm".
#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub norm_minutes: i64,
    pub worked_minutes: Option<i64>,
    pub delta_minutes: Option<i64>,
}

impl DayReport {
    pub fn is_recorded(&self) -> bool {
        self.worked_minutes.is_some()
    }
}

pub fn day_report(date: NaiveDate, entry: Option<&WorkLogEntry>, policy: &NormPolicy) -> DayReport {
    let norm = policy.minutes_for_date(date);

    let worked = entry
        .filter(|e| e.has_times())
        .map(|e| worked_minutes(e.start, e.end, e.break_minutes));

    DayReport {
        date,
        norm_minutes: norm,
        worked_minutes: worked,
        delta_minutes: worked.map(|w| w - norm),
    }
}
