use chrono::{Datelike, NaiveDate};

/// Expected working minutes per ISO weekday (index 0 = Monday).
///
/// The default encodes the stock schedule (9h Monday–Thursday, 4h Friday,
/// nothing on weekends); the config file can replace any slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormPolicy {
    minutes: [i64; 7],
}

impl Default for NormPolicy {
    fn default() -> Self {
        Self {
            minutes: [540, 540, 540, 540, 240, 0, 0],
        }
    }
}

impl NormPolicy {
    pub fn new(minutes: [i64; 7]) -> Self {
        Self { minutes }
    }

    /// Norm for an ISO weekday number (1 = Monday .. 7 = Sunday).
    pub fn minutes_for_iso_weekday(&self, iso_weekday: u32) -> i64 {
        debug_assert!((1..=7).contains(&iso_weekday));
        self.minutes[(iso_weekday - 1) as usize]
    }

    pub fn minutes_for_date(&self, date: NaiveDate) -> i64 {
        self.minutes_for_iso_weekday(date.weekday().number_from_monday())
    }
}
