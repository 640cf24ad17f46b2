// Trend service - owns the store/viewport pair and recomputes the view
use crate::application::kpi_service;
use crate::application::series_store::TimeSeriesStore;
use crate::application::viewport::ViewportController;
use crate::domain::gesture::{Gesture, ZoomSpan};
use crate::domain::kpi::{ExtraMetric, KpiResult};
use crate::domain::reading::{Channel, Reading};
use crate::domain::trend::{LoadSummary, SeriesData, TrendPoint, TrendView};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const MAX_POINTS_PER_SERIES: usize = 150;

#[derive(Debug)]
struct TrendState {
    store: TimeSeriesStore,
    viewport: ViewportController,
}

/// The facade the HTTP layer talks to. The core itself is single-threaded;
/// this lock only serializes handler access to the one (store, window) pair.
#[derive(Clone)]
pub struct TrendService {
    state: Arc<RwLock<TrendState>>,
}

impl TrendService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(TrendState {
                store: TimeSeriesStore::new(),
                viewport: ViewportController::new(),
            })),
        }
    }

    /// Replace the store wholesale and zoom to the full range, as the
    /// dashboard does after processing a fresh upload.
    pub async fn load(&self, readings: Vec<Reading>, rows_dropped: usize) -> LoadSummary {
        let mut state = self.state.write().await;
        state.store.load(readings);
        state.viewport.reset();

        let bounds = state.store.bounds();
        state
            .viewport
            .apply(Gesture::PresetZoom { span: ZoomSpan::All }, bounds);

        let (start_ms, end_ms) = bounds.unwrap_or((0, 0));
        tracing::info!(
            rows = state.store.len(),
            dropped = rows_dropped,
            "replaced store from upload"
        );
        LoadSummary {
            rows_loaded: state.store.len(),
            rows_dropped,
            start_ms,
            end_ms,
        }
    }

    /// Clear everything; the next view reports no window and unavailable
    /// KPIs until another load.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.store.clear();
        state.viewport.reset();
    }

    /// Run one gesture and return the refreshed view.
    pub async fn apply(&self, gesture: Gesture, metric: ExtraMetric) -> TrendView {
        let mut state = self.state.write().await;
        let bounds = state.store.bounds();
        let window = state.viewport.apply(gesture, bounds);
        let kpis = match &window {
            Some(w) => kpi_service::compute(&state.store, w, metric),
            None => KpiResult::unavailable(metric),
        };
        TrendView { window, kpis }
    }

    /// The current view without a transition.
    pub async fn view(&self, metric: ExtraMetric) -> TrendView {
        let state = self.state.read().await;
        let window = state.viewport.window();
        let kpis = match &window {
            Some(w) => kpi_service::compute(&state.store, w, metric),
            None => KpiResult::unavailable(metric),
        };
        TrendView { window, kpis }
    }

    /// Per-channel points inside the current window for the redraw, capped
    /// by bucket-average downsampling. Soot-blow events pass through as a
    /// sparse marker series.
    pub async fn series(&self, max_points: usize) -> Vec<SeriesData> {
        let state = self.state.read().await;
        let Some(window) = state.viewport.window() else {
            return Vec::new();
        };
        let visible = state.store.between(window.start_ms, window.end_ms);

        let mut series = Vec::with_capacity(Channel::ALL.len() + 1);
        for channel in Channel::ALL {
            let points: Vec<TrendPoint> = visible
                .iter()
                .filter(|r| !channel.value(r).is_nan())
                .map(|r| TrendPoint::new(r.timestamp_ms, channel.value(r)))
                .collect();
            // Only include channels that have data in the window
            if points.is_empty() {
                continue;
            }
            series.push(SeriesData::new(
                channel.id().to_string(),
                channel.name().to_string(),
                channel.unit().to_string(),
                downsample_points(points, max_points),
            ));
        }

        let soot_events: Vec<TrendPoint> = visible
            .iter()
            .filter(|r| r.soot)
            .map(|r| TrendPoint::new(r.timestamp_ms, 1.0))
            .collect();
        if !soot_events.is_empty() {
            series.push(SeriesData::new(
                "soot".to_string(),
                "Soot Blow".to_string(),
                String::new(),
                soot_events,
            ));
        }

        series
    }
}

/// Downsample time series points using bucket averaging; each bucket keeps
/// its middle point's timestamp.
fn downsample_points(points: Vec<TrendPoint>, max_points: usize) -> Vec<TrendPoint> {
    if max_points == 0 || points.len() <= max_points {
        return points;
    }

    let bucket_size = (points.len() as f64 / max_points as f64).ceil() as usize;
    let mut downsampled = Vec::with_capacity(max_points);

    for chunk in points.chunks(bucket_size) {
        let mid_idx = chunk.len() / 2;
        let avg_value = chunk.iter().map(|p| p.v).sum::<f64>() / chunk.len() as f64;
        downsampled.push(TrendPoint::new(chunk[mid_idx].t, avg_value));
    }

    downsampled
}
