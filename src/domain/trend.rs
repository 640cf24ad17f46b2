// Trend view domain model - payloads handed to the render bridge
use super::kpi::KpiResult;
use super::window::DateWindow;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendPoint {
    pub t: i64,
    pub v: f64,
}

impl TrendPoint {
    pub fn new(t: i64, v: f64) -> Self {
        Self { t, v }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub points: Vec<TrendPoint>,
}

impl SeriesData {
    pub fn new(id: String, name: String, unit: String, points: Vec<TrendPoint>) -> Self {
        Self {
            id,
            name,
            unit,
            points,
        }
    }
}

/// Snapshot sent back after every transition: the window (None before the
/// first load) and the KPIs recomputed over it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendView {
    pub window: Option<DateWindow>,
    pub kpis: KpiResult,
}

/// Outcome of a CSV ingest, reported to the bridge.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadSummary {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub start_ms: i64,
    pub end_ms: i64,
}
