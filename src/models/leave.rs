use chrono::NaiveDate;
use serde::Serialize;

/// Per-year leave entitlement record.
///
/// Days and hours mix on purpose: the base and purchased allowances are
/// granted in days, while carry-over and manual corrections are tracked in
/// hours. `hours_per_day` is the conversion factor between the two.
#[derive(Debug, Clone)]
pub struct LeaveBalance {
    pub year: i32,
    pub base_days: f64,
    pub purchased_days: f64,
    pub carry_over_hours: f64,
    pub manual_adjustment_hours: f64,
    pub hours_per_day: f64,
}

impl LeaveBalance {
    pub fn defaults_for(year: i32) -> Self {
        Self {
            year,
            base_days: 25.0,
            purchased_days: 0.0,
            carry_over_hours: 0.0,
            manual_adjustment_hours: 0.0,
            hours_per_day: 8.0,
        }
    }
}

/// One logged leave absence. Several entries may target the same date; the
/// ledger sums them all.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}
