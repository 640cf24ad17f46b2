// KPI aggregation over the visible window
use crate::application::series_store::TimeSeriesStore;
use crate::domain::kpi::{ExtraMetric, KpiResult};
use crate::domain::reading::Reading;
use crate::domain::window::DateWindow;

/// Compute the KPI triple over the readings visible in `window`. An empty
/// subset yields the unavailable marker for every field.
pub fn compute(store: &TimeSeriesStore, window: &DateWindow, metric: ExtraMetric) -> KpiResult {
    let visible = store.between(window.start_ms, window.end_ms);
    if visible.is_empty() {
        return KpiResult::unavailable(metric);
    }

    let extra = match metric {
        ExtraMetric::Temp => max_of(visible, |r| r.temp_comb),
        ExtraMetric::Idf => mean_of(visible, |r| r.idf),
        ExtraMetric::Rgf => mean_of(visible, |r| r.rgf),
    };

    KpiResult {
        avg_power: mean_of(visible, |r| r.power),
        avg_steam: mean_of(visible, |r| r.steam),
        extra,
        metric,
    }
}

// NaN samples are skipped per field; the row still contributes to every
// other field's aggregate.

fn mean_of<F>(readings: &[Reading], field: F) -> Option<f64>
where
    F: Fn(&Reading) -> f64,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for reading in readings {
        let value = field(reading);
        if !value.is_nan() {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

fn max_of<F>(readings: &[Reading], field: F) -> Option<f64>
where
    F: Fn(&Reading) -> f64,
{
    readings
        .iter()
        .map(field)
        .filter(|value| !value.is_nan())
        .fold(None, |acc, value| match acc {
            Some(max) => Some(f64::max(max, value)),
            None => Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::window::Granularity;

    fn store_with(readings: Vec<Reading>) -> TimeSeriesStore {
        let mut store = TimeSeriesStore::new();
        store.load(readings);
        store
    }

    fn window(start_ms: i64, end_ms: i64) -> DateWindow {
        DateWindow::new(start_ms, end_ms, Granularity::Hour)
    }

    #[test]
    fn test_empty_window_is_unavailable() {
        let store = store_with(vec![Reading::new(100, 1.0, 5.0, 900.0, 180.0, 60.0, 40.0, false)]);
        let result = compute(&store, &window(0, 100), ExtraMetric::Temp);
        assert_eq!(result.avg_power, None);
        assert_eq!(result.avg_steam, None);
        assert_eq!(result.extra, None);
    }

    #[test]
    fn test_means_over_visible_subset() {
        let store = store_with(vec![
            Reading::new(10, 2.0, 5.0, 900.0, 180.0, 60.0, 40.0, false),
            Reading::new(20, 4.0, 7.0, 950.0, 180.0, 80.0, 40.0, false),
            // Outside the window
            Reading::new(90, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, false),
        ]);
        let result = compute(&store, &window(0, 50), ExtraMetric::Idf);
        assert_eq!(result.avg_power, Some(6.0));
        assert_eq!(result.avg_steam, Some(3.0));
        assert_eq!(result.extra, Some(70.0));
    }

    #[test]
    fn test_nan_is_excluded_per_field_only() {
        let store = store_with(vec![
            Reading::new(10, f64::NAN, 5.0, 900.0, 180.0, 60.0, 40.0, false),
            Reading::new(20, 4.0, 7.0, 950.0, 180.0, 80.0, 40.0, false),
        ]);
        let result = compute(&store, &window(0, 50), ExtraMetric::Temp);
        // Steam skips the NaN sample, power still averages both rows
        assert_eq!(result.avg_steam, Some(4.0));
        assert_eq!(result.avg_power, Some(6.0));
        assert_eq!(result.extra, Some(950.0));
    }

    #[test]
    fn test_all_nan_field_is_unavailable() {
        let store = store_with(vec![
            Reading::new(10, f64::NAN, 5.0, f64::NAN, 180.0, 60.0, 40.0, false),
        ]);
        let result = compute(&store, &window(0, 50), ExtraMetric::Temp);
        assert_eq!(result.avg_steam, None);
        assert_eq!(result.extra, None);
        assert_eq!(result.avg_power, Some(5.0));
    }

    #[test]
    fn test_extra_metric_max_temperature() {
        let store = store_with(vec![
            Reading::new(10, 1.0, 5.0, 900.0, 180.0, 60.0, 40.0, false),
            Reading::new(20, 1.0, 5.0, 1010.0, 180.0, 60.0, 40.0, false),
            Reading::new(30, 1.0, 5.0, 970.0, 180.0, 60.0, 40.0, false),
        ]);
        let result = compute(&store, &window(0, 50), ExtraMetric::Temp);
        assert_eq!(result.extra, Some(1010.0));
    }
}
