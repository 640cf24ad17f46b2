// In-memory time series store over sorted readings
use crate::domain::reading::Reading;

/// Owns the sorted reading sequence. Replaced wholesale on each successful
/// load, cleared on reset, never mutated in place.
#[derive(Debug, Default)]
pub struct TimeSeriesStore {
    readings: Vec<Reading>,
}

impl TimeSeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all prior data. Readings are stable-sorted ascending by
    /// timestamp, so ties keep their input order.
    pub fn load(&mut self, mut readings: Vec<Reading>) {
        readings.sort_by_key(|r| r.timestamp_ms);
        self.readings = readings;
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// First and last timestamp, or None when empty.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match (self.readings.first(), self.readings.last()) {
            (Some(first), Some(last)) => Some((first.timestamp_ms, last.timestamp_ms)),
            _ => None,
        }
    }

    /// The contiguous slice with `start_ms <= t < end_ms`. Binary-search
    /// bounded; reversed or empty ranges yield an empty slice.
    pub fn between(&self, start_ms: i64, end_ms: i64) -> &[Reading] {
        let lo = self.readings.partition_point(|r| r.timestamp_ms < start_ms);
        let hi = self.readings.partition_point(|r| r.timestamp_ms < end_ms);
        if lo >= hi {
            return &[];
        }
        &self.readings[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_at(timestamp_ms: i64, power: f64) -> Reading {
        Reading::new(timestamp_ms, 1.0, power, 900.0, 180.0, 60.0, 40.0, false)
    }

    #[test]
    fn test_between_is_half_open() {
        let mut store = TimeSeriesStore::new();
        store.load(vec![
            reading_at(10, 1.0),
            reading_at(20, 2.0),
            reading_at(30, 3.0),
        ]);

        let slice = store.between(10, 30);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].timestamp_ms, 10);
        // A reading exactly at `end` belongs to the next window
        assert_eq!(slice[1].timestamp_ms, 20);

        assert_eq!(store.between(0, 100).len(), 3);
        assert_eq!(store.between(31, 100).len(), 0);
    }

    #[test]
    fn test_between_reversed_range_is_empty() {
        let mut store = TimeSeriesStore::new();
        store.load(vec![reading_at(10, 1.0), reading_at(20, 2.0)]);
        assert!(store.between(20, 10).is_empty());
        assert!(store.between(15, 15).is_empty());
    }

    #[test]
    fn test_load_sorts_and_keeps_tie_order() {
        let mut store = TimeSeriesStore::new();
        store.load(vec![
            reading_at(30, 3.0),
            reading_at(10, 1.0),
            reading_at(10, 9.0),
        ]);

        let all = store.between(i64::MIN, i64::MAX);
        assert_eq!(all[0].timestamp_ms, 10);
        assert_eq!(all[0].power, 1.0);
        assert_eq!(all[1].power, 9.0);
        assert_eq!(all[2].timestamp_ms, 30);
        assert_eq!(store.bounds(), Some((10, 30)));
    }

    #[test]
    fn test_empty_store() {
        let store = TimeSeriesStore::new();
        assert_eq!(store.bounds(), None);
        assert!(store.between(0, 100).is_empty());
        assert!(store.is_empty());
    }
}
