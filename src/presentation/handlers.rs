// HTTP request handlers
use crate::application::trend_service::MAX_POINTS_PER_SERIES;
use crate::domain::gesture::Gesture;
use crate::domain::kpi::ExtraMetric;
use crate::infrastructure::csv_import::parse_readings;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MetricQuery {
    pub metric: Option<ExtraMetric>,
}

#[derive(Deserialize)]
pub struct SeriesQuery {
    pub max_points: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Ingest a raw CSV body, replacing all prior data and zooming to the full
/// range
pub async fn upload_csv(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    match parse_readings(&body, &state.channels_config) {
        Ok(parsed) => {
            let summary = state
                .trend_service
                .load(parsed.readings, parsed.rows_dropped)
                .await;
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(e) => {
            tracing::warn!("rejected CSV upload: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Drop all loaded data; the dashboard returns to its pre-load state
pub async fn reset_data(State(state): State<Arc<AppState>>) -> StatusCode {
    state.trend_service.reset().await;
    StatusCode::NO_CONTENT
}

/// Apply one user gesture and return the refreshed window + KPIs
pub async fn apply_gesture(
    Query(query): Query<MetricQuery>,
    State(state): State<Arc<AppState>>,
    Json(gesture): Json<Gesture>,
) -> impl IntoResponse {
    let metric = query.metric.unwrap_or_default();
    Json(state.trend_service.apply(gesture, metric).await)
}

/// Current window + KPIs without a transition
pub async fn get_view(
    Query(query): Query<MetricQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let metric = query.metric.unwrap_or_default();
    Json(state.trend_service.view(metric).await)
}

/// Per-channel points inside the current window, for the redraw
pub async fn get_series(
    Query(query): Query<SeriesQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let max_points = query.max_points.unwrap_or(MAX_POINTS_PER_SERIES);
    Json(state.trend_service.series(max_points).await)
}
