//! Ledger engines: pure computations over in-memory records.
//!
//! Nothing in here performs I/O or holds state between calls; callers load
//! records through the db layer, hand them in, and render what comes back.

pub mod day;
pub mod leave;
pub mod norm;
pub mod week;
pub mod year;

pub use day::{DayReport, day_report};
pub use leave::{LeaveStats, compute_leave_stats};
pub use norm::NormPolicy;
pub use week::{WeekReport, week_report};
pub use year::{YearReport, YearWeek, year_report};
