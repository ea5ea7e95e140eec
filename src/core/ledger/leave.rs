use crate::models::leave::{LeaveBalance, LeaveEntry};

/// Leave ledger output. All six figures keep full `f64` precision; rounding
/// belongs to the display layer so repeated round-trips cannot drift.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveStats {
    pub entitlement_days: f64,
    pub entitlement_hours: f64,
    pub taken_hours: f64,
    pub taken_days: f64,
    pub remaining_hours: f64,
    pub remaining_days: f64,
}

/// Entitlement minus logged absences for one year.
///
/// A missing balance row falls back to the stock entitlement (25 days at
/// 8h/day, no corrections). Entries are assumed pre-filtered to the target
/// year. `hours_per_day` must be positive; the write path enforces that
/// before a balance row can reach this function.
pub fn compute_leave_stats(balance: Option<&LeaveBalance>, entries: &[LeaveEntry]) -> LeaveStats {
    let defaults;
    let b = match balance {
        Some(b) => b,
        None => {
            defaults = LeaveBalance::defaults_for(0);
            &defaults
        }
    };

    let entitlement_days = b.base_days + b.purchased_days;
    let entitlement_hours =
        entitlement_days * b.hours_per_day + b.carry_over_hours + b.manual_adjustment_hours;

    let taken_hours: f64 = entries.iter().map(|e| e.hours).sum();
    let taken_days = taken_hours / b.hours_per_day;

    let remaining_hours = entitlement_hours - taken_hours;
    let remaining_days = remaining_hours / b.hours_per_day;

    LeaveStats {
        entitlement_days,
        entitlement_hours,
        taken_hours,
        taken_days,
        remaining_hours,
        remaining_days,
    }
}
