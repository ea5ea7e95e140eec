//! Leave ledger tests: entitlement arithmetic, defaults, precision.

use chrono::NaiveDate;
use workledger::core::ledger::compute_leave_stats;
use workledger::models::leave::{LeaveBalance, LeaveEntry};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn entry(date: &str, hours: f64) -> LeaveEntry {
    LeaveEntry {
        id: 0,
        date: d(date),
        hours,
        description: String::new(),
    }
}

#[test]
fn entitlement_combines_all_components() {
    let balance = LeaveBalance {
        year: 2026,
        base_days: 25.0,
        purchased_days: 5.0,
        carry_over_hours: 4.0,
        manual_adjustment_hours: -2.0,
        hours_per_day: 8.0,
    };
    let entries = vec![entry("2026-07-20", 8.0), entry("2026-07-21", 4.0)];

    let stats = compute_leave_stats(Some(&balance), &entries);

    assert_eq!(stats.entitlement_days, 30.0);
    assert_eq!(stats.entitlement_hours, 242.0);
    assert_eq!(stats.taken_hours, 12.0);
    assert_eq!(stats.taken_days, 1.5);
    assert_eq!(stats.remaining_hours, 230.0);
    assert_eq!(stats.remaining_days, 28.75);
}

#[test]
fn absent_balance_falls_back_to_defaults() {
    let stats = compute_leave_stats(None, &[]);

    assert_eq!(stats.entitlement_days, 25.0);
    assert_eq!(stats.entitlement_hours, 200.0);
    assert_eq!(stats.taken_hours, 0.0);
    assert_eq!(stats.taken_days, 0.0);
    assert_eq!(stats.remaining_hours, 200.0);
    assert_eq!(stats.remaining_days, 25.0);
}

#[test]
fn entries_on_the_same_date_are_summed() {
    // no overlap constraint: two half-days on the same date both count
    let entries = vec![entry("2026-08-03", 4.0), entry("2026-08-03", 4.0)];

    let stats = compute_leave_stats(None, &entries);

    assert_eq!(stats.taken_hours, 8.0);
    assert_eq!(stats.taken_days, 1.0);
    assert_eq!(stats.remaining_hours, 192.0);
}

#[test]
fn fractional_hours_keep_full_precision() {
    let balance = LeaveBalance {
        year: 2026,
        base_days: 20.0,
        purchased_days: 0.0,
        carry_over_hours: 0.0,
        manual_adjustment_hours: 0.0,
        hours_per_day: 7.5,
    };
    let entries = vec![entry("2026-02-02", 3.75)];

    let stats = compute_leave_stats(Some(&balance), &entries);

    assert_eq!(stats.entitlement_hours, 150.0);
    assert_eq!(stats.taken_days, 0.5);
    assert_eq!(stats.remaining_hours, 146.25);
    // no rounding at this layer: the figures must recompose exactly
    assert_eq!(
        stats.remaining_days * balance.hours_per_day,
        stats.remaining_hours
    );
}

#[test]
fn negative_adjustment_can_push_remaining_below_zero() {
    let balance = LeaveBalance {
        year: 2026,
        base_days: 1.0,
        purchased_days: 0.0,
        carry_over_hours: 0.0,
        manual_adjustment_hours: -4.0,
        hours_per_day: 8.0,
    };
    let entries = vec![entry("2026-01-07", 8.0)];

    let stats = compute_leave_stats(Some(&balance), &entries);

    assert_eq!(stats.entitlement_hours, 4.0);
    assert_eq!(stats.remaining_hours, -4.0);
    assert_eq!(stats.remaining_days, -0.5);
}
