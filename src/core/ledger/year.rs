use crate::core::ledger::norm::NormPolicy;
use crate::core::ledger::week::{WeekReport, week_report};
use crate::models::work_entry::WorkLogEntry;
use crate::utils::date::{group_by_iso_week, weekdays_of_year};
use std::collections::HashMap;

/// One ISO week of the year report, with the running balance after it.
#[derive(Debug, Clone)]
pub struct YearWeek {
    pub report: WeekReport,
    pub cumulative_minutes: i64,
}

/// Year-long work-time ledger: every Mon–Fri of the calendar year bucketed
/// into ISO weeks, with a cumulative overtime balance threaded through.
#[derive(Debug, Clone)]
pub struct YearReport {
    pub year: i32,
    pub carry_over_minutes: i64,
    pub weeks: Vec<YearWeek>,
    pub balance_minutes: i64,
}

/// Build the full year report.
///
/// The cumulative sequence starts from the stored carry-over; a week with no
/// recorded day contributes 0 and leaves the balance untouched. The final
/// element is the year's overall overtime/undertime balance.
pub fn year_report(
    year: i32,
    entries: &HashMap<chrono::NaiveDate, WorkLogEntry>,
    carry_over_minutes: i64,
    policy: &NormPolicy,
) -> YearReport {
    let weekdays = weekdays_of_year(year);

    let mut weeks = Vec::new();
    let mut cumulative = carry_over_minutes;

    for ((iso_year, week_num), bucket) in group_by_iso_week(&weekdays) {
        let report = week_report(iso_year, week_num, &bucket, entries, policy);

        cumulative += report.delta.unwrap_or(0);

        weeks.push(YearWeek {
            report,
            cumulative_minutes: cumulative,
        });
    }

    YearReport {
        year,
        carry_over_minutes,
        weeks,
        balance_minutes: cumulative,
    }
}
