//! Engine-level tests: time primitives, norm policy, weekly and yearly
//! aggregation. These exercise the library API directly, without the CLI.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use workledger::core::ledger::{NormPolicy, day_report, week_report, year_report};
use workledger::models::work_entry::WorkLogEntry;
use workledger::utils::date::{group_by_iso_week, iso_week_of, weekdays_of_year};
use workledger::utils::time::{format_minutes, parse_signed_minutes, worked_minutes};

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").expect("valid time"))
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn entry(date: &str, start: &str, end: &str, break_minutes: i64) -> WorkLogEntry {
    WorkLogEntry::new(
        d(date),
        t(start),
        t(end),
        break_minutes,
        String::new(),
    )
}

fn by_date(entries: Vec<WorkLogEntry>) -> HashMap<NaiveDate, WorkLogEntry> {
    entries.into_iter().map(|e| (e.date, e)).collect()
}

// ---------------------------
// worked_minutes
// ---------------------------

#[test]
fn worked_minutes_subtracts_break() {
    assert_eq!(worked_minutes(t("09:00"), t("17:00"), 30), 450);
}

#[test]
fn worked_minutes_missing_endpoint_is_zero() {
    assert_eq!(worked_minutes(None, t("17:00"), 0), 0);
    assert_eq!(worked_minutes(t("09:00"), None, 0), 0);
    assert_eq!(worked_minutes(None, None, 0), 0);
}

#[test]
fn worked_minutes_clamps_negative_span() {
    // end before start: no overnight support, clamp to zero
    assert_eq!(worked_minutes(t("09:00"), t("08:00"), 0), 0);
}

#[test]
fn worked_minutes_break_longer_than_span_clamps() {
    assert_eq!(worked_minutes(t("09:00"), t("09:30"), 60), 0);
}

#[test]
fn worked_minutes_never_negative() {
    for (s, e, b) in [
        ("00:00", "23:59", 0),
        ("12:00", "12:00", 0),
        ("18:00", "06:00", 45),
        ("08:00", "16:00", 600),
    ] {
        assert!(worked_minutes(t(s), t(e), b) >= 0, "{s}-{e} break {b}");
    }
}

// ---------------------------
// format_minutes
// ---------------------------

#[test]
fn format_minutes_renders_sign_and_padding() {
    assert_eq!(format_minutes(0), "0:00");
    assert_eq!(format_minutes(-90), "-1:30");
    assert_eq!(format_minutes(135), "2:15");
    assert_eq!(format_minutes(-5), "-0:05");
    assert_eq!(format_minutes(600), "10:00");
}

#[test]
fn format_minutes_round_trips() {
    for m in [-1860, -600, -90, -1, 0, 1, 59, 60, 135, 540, 2460] {
        assert_eq!(parse_signed_minutes(&format_minutes(m)), Some(m), "{m}");
    }
}

#[test]
fn parse_signed_minutes_rejects_garbage() {
    assert_eq!(parse_signed_minutes("1:3"), None);
    assert_eq!(parse_signed_minutes("1:75"), None);
    assert_eq!(parse_signed_minutes("abc"), None);
    assert_eq!(parse_signed_minutes("90"), None);
}

// ---------------------------
// NormPolicy
// ---------------------------

#[test]
fn default_norm_policy_matches_schedule() {
    let policy = NormPolicy::default();
    for wd in 1..=4 {
        assert_eq!(policy.minutes_for_iso_weekday(wd), 540);
    }
    assert_eq!(policy.minutes_for_iso_weekday(5), 240);
    assert_eq!(policy.minutes_for_iso_weekday(6), 0);
    assert_eq!(policy.minutes_for_iso_weekday(7), 0);
}

// ---------------------------
// Per-day tri-state
// ---------------------------

#[test]
fn day_without_entry_is_unknown_not_zero() {
    let policy = NormPolicy::default();
    // 2026-03-02 is a Monday
    let report = day_report(d("2026-03-02"), None, &policy);

    assert_eq!(report.norm_minutes, 540);
    assert_eq!(report.worked_minutes, None);
    assert_eq!(report.delta_minutes, None);
    assert!(!report.is_recorded());
}

#[test]
fn day_with_notes_only_is_unknown() {
    let policy = NormPolicy::default();
    let e = WorkLogEntry::new(d("2026-03-02"), None, None, 0, "dentist".into());

    let report = day_report(d("2026-03-02"), Some(&e), &policy);
    assert_eq!(report.worked_minutes, None);
    assert_eq!(report.delta_minutes, None);
}

#[test]
fn day_with_open_entry_counts_zero_worked() {
    let policy = NormPolicy::default();
    let e = WorkLogEntry::new(d("2026-03-02"), t("09:00"), None, 0, String::new());

    let report = day_report(d("2026-03-02"), Some(&e), &policy);
    assert_eq!(report.worked_minutes, Some(0));
    assert_eq!(report.delta_minutes, Some(-540));
}

#[test]
fn day_at_norm_reports_zero_delta() {
    let policy = NormPolicy::default();
    let e = entry("2026-03-02", "09:00", "18:30", 30);

    let report = day_report(d("2026-03-02"), Some(&e), &policy);
    assert_eq!(report.worked_minutes, Some(540));
    assert_eq!(report.delta_minutes, Some(0));
}

// ---------------------------
// Weekly aggregate
// ---------------------------

fn week_of(monday: &str) -> Vec<NaiveDate> {
    let m = d(monday);
    (0..5).map(|i| m + chrono::Duration::days(i)).collect()
}

#[test]
fn missing_days_still_count_their_norm() {
    let policy = NormPolicy::default();
    // 2026-03-02 is a Monday; entry covers exactly the Monday norm
    let entries = by_date(vec![entry("2026-03-02", "09:00", "18:00", 0)]);

    let report = week_report(2026, 10, &week_of("2026-03-02"), &entries, &policy);

    assert_eq!(report.total_norm, 2400);
    assert_eq!(report.total_worked, Some(540));
    // missing days are not exempt: the week still owes Tue-Fri norms
    assert_eq!(report.delta, Some(-1860));
}

#[test]
fn week_with_no_entries_has_no_data() {
    let policy = NormPolicy::default();
    let entries = HashMap::new();

    let report = week_report(2026, 10, &week_of("2026-03-02"), &entries, &policy);

    assert_eq!(report.total_norm, 2400);
    assert_eq!(report.total_worked, None);
    assert_eq!(report.delta, None);
    assert!(!report.has_entries());
}

#[test]
fn full_week_at_norm_balances_to_zero() {
    let policy = NormPolicy::default();
    let entries = by_date(vec![
        entry("2026-03-02", "09:00", "18:00", 0),
        entry("2026-03-03", "09:00", "18:00", 0),
        entry("2026-03-04", "09:00", "18:00", 0),
        entry("2026-03-05", "09:00", "18:00", 0),
        entry("2026-03-06", "08:00", "12:00", 0),
    ]);

    let report = week_report(2026, 10, &week_of("2026-03-02"), &entries, &policy);
    assert_eq!(report.total_worked, Some(2400));
    assert_eq!(report.delta, Some(0));
}

// ---------------------------
// Yearly cumulative balance
// ---------------------------

#[test]
fn cumulative_balance_threads_carry_over() {
    let policy = NormPolicy::default();

    // ISO week 2 of 2026 (Jan 5-9): +60 over norm
    // ISO week 3 of 2026 (Jan 12-16): -30 under norm
    let entries = by_date(vec![
        entry("2026-01-05", "09:00", "18:00", 0),
        entry("2026-01-06", "09:00", "18:00", 0),
        entry("2026-01-07", "09:00", "18:00", 0),
        entry("2026-01-08", "09:00", "18:00", 0),
        entry("2026-01-09", "08:00", "13:00", 0), // 300 vs 240 → +60
        entry("2026-01-12", "09:00", "18:00", 0),
        entry("2026-01-13", "09:00", "18:00", 0),
        entry("2026-01-14", "09:00", "18:00", 0),
        entry("2026-01-15", "09:00", "18:00", 0),
        entry("2026-01-16", "08:00", "11:30", 0), // 210 vs 240 → -30
    ]);

    let report = year_report(2026, &entries, 120, &policy);

    // 2026-01-01 is a Thursday, so the year starts inside ISO week 1
    assert_eq!(report.weeks[0].report.week, 1);
    assert!(!report.weeks[0].report.has_entries());
    assert_eq!(report.weeks[0].cumulative_minutes, 120);

    assert_eq!(report.weeks[1].report.delta, Some(60));
    assert_eq!(report.weeks[1].cumulative_minutes, 180);

    assert_eq!(report.weeks[2].report.delta, Some(-30));
    assert_eq!(report.weeks[2].cumulative_minutes, 150);

    // empty weeks do not move the balance
    assert_eq!(report.balance_minutes, 150);
    assert_eq!(report.weeks.last().unwrap().cumulative_minutes, 150);
}

#[test]
fn empty_year_balance_equals_carry_over() {
    let policy = NormPolicy::default();
    let report = year_report(2026, &HashMap::new(), -45, &policy);

    assert_eq!(report.balance_minutes, -45);
    assert!(report.weeks.iter().all(|w| !w.report.has_entries()));
}

// ---------------------------
// ISO week grouping
// ---------------------------

#[test]
fn iso_week_of_january_first_on_thursday_is_week_one() {
    // 2015-01-01 was a Thursday → week 1 of 2015
    assert_eq!(iso_week_of(d("2015-01-01")), (2015, 1));
}

#[test]
fn iso_week_of_january_first_on_friday_belongs_to_prior_year() {
    // 2016-01-01 was a Friday → last week of 2015
    assert_eq!(iso_week_of(d("2016-01-01")), (2015, 53));
}

#[test]
fn grouping_is_chronological_and_contiguous() {
    let days = weekdays_of_year(2026);
    assert_eq!(days.len(), 261);

    let groups = group_by_iso_week(&days);

    // chronological bucket order, no week split across two buckets
    let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted);

    // every day lands in the bucket matching its own ISO key
    for (key, bucket) in &groups {
        assert!(!bucket.is_empty());
        for day in bucket {
            assert_eq!(iso_week_of(*day), *key);
        }
    }

    // total days survive the partition
    let total: usize = groups.iter().map(|(_, b)| b.len()).sum();
    assert_eq!(total, days.len());
}
