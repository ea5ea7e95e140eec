/// Overtime balance inherited from all years before `year`, manually
/// entered. One row per year; it seeds the cumulative balance of the
/// year report.
#[derive(Debug, Clone, Copy)]
pub struct CarryOver {
    pub year: i32,    // ⇔ overtime_carryover.year (INTEGER, PK)
    pub minutes: i64, // ⇔ overtime_carryover.minutes (INTEGER, signed)
}
