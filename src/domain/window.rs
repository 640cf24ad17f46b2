// Viewport window domain model and wall-clock calendar helpers
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Display resolution of the time axis, tied to the window span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hour,
    Day,
    Month,
}

/// The visible time range: closed-open interval [start_ms, end_ms).
/// Never mutated - every viewport transition produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start_ms: i64,
    pub end_ms: i64,
    pub granularity: Granularity,
}

impl DateWindow {
    pub fn new(start_ms: i64, end_ms: i64, granularity: Granularity) -> Self {
        debug_assert!(end_ms > start_ms);
        Self {
            start_ms,
            end_ms,
            granularity,
        }
    }

    pub fn span_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    pub fn midpoint_ms(&self) -> i64 {
        self.start_ms + self.span_ms() / 2
    }

    /// Whether the window intersects [data_min, data_max] at all.
    pub fn overlaps(&self, data_min: i64, data_max: i64) -> bool {
        !(self.end_ms < data_min || self.start_ms > data_max)
    }
}

// Calendar arithmetic below is naive wall-clock: CSV timestamps carry no
// zone, so readings are parsed as local naive datetimes and truncation and
// month/day shifts operate on the same naive calendar. Out-of-range chrono
// results surface as None and callers treat that as a no-op.

pub fn to_datetime(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

pub fn to_millis(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

pub fn date_start_ms(date: NaiveDate) -> i64 {
    to_millis(date.and_time(NaiveTime::MIN))
}

/// Calendar day containing an instant.
pub fn day_start(ms: i64) -> Option<NaiveDate> {
    to_datetime(ms).map(|dt| dt.date())
}

/// Truncate an instant down to its local midnight.
pub fn midnight_ms(ms: i64) -> Option<i64> {
    day_start(ms).map(date_start_ms)
}

/// First day of the calendar month containing an instant.
pub fn month_start(ms: i64) -> Option<NaiveDate> {
    to_datetime(ms).and_then(|dt| dt.date().with_day(1))
}

/// Shift a date by whole calendar months (year rollover included).
pub fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    }
}

/// Shift a date by whole calendar days.
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    if delta >= 0 {
        date.checked_add_days(Days::new(delta as u64))
    } else {
        date.checked_sub_days(Days::new(delta.unsigned_abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms_of(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        let date = NaiveDate::from_ymd_opt(y, mo, d).unwrap();
        to_millis(date.and_hms_opt(h, mi, 0).unwrap())
    }

    #[test]
    fn test_midnight_truncation() {
        let noon = ms_of(2025, 12, 3, 12, 34);
        assert_eq!(midnight_ms(noon), Some(ms_of(2025, 12, 3, 0, 0)));
        // Already-midnight instants are fixed points
        assert_eq!(midnight_ms(ms_of(2025, 12, 3, 0, 0)), Some(ms_of(2025, 12, 3, 0, 0)));
    }

    #[test]
    fn test_month_rollover() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(shift_months(dec, 1), NaiveDate::from_ymd_opt(2026, 1, 1));
        let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(shift_months(jan, -1), NaiveDate::from_ymd_opt(2025, 12, 1));
    }

    #[test]
    fn test_month_start() {
        let mid_month = ms_of(2025, 2, 17, 8, 0);
        assert_eq!(month_start(mid_month), NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn test_window_midpoint_and_overlap() {
        let w = DateWindow::new(0, DAY_MS, Granularity::Hour);
        assert_eq!(w.span_ms(), DAY_MS);
        assert_eq!(w.midpoint_ms(), DAY_MS / 2);
        assert!(w.overlaps(DAY_MS, 2 * DAY_MS));
        assert!(!w.overlaps(DAY_MS + 1, 2 * DAY_MS));
    }
}
