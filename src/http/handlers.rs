//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Every request recomputes from the immutable base
//! tables; there is no cache to invalidate.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{DatasetInfoResponse, DateRangeQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{Visualization, VisualizationData};
use crate::data::Datasets;
use crate::models::DateRange;
use crate::services::{render_visualization, AnalysisError};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Dataset metadata
// =============================================================================

/// GET /v1/datasets
///
/// Row counts and the daily date span, for initializing the pickers.
pub async fn get_datasets(State(state): State<AppState>) -> HandlerResult<DatasetInfoResponse> {
    let span = state.datasets.date_span();
    Ok(Json(DatasetInfoResponse {
        daily_rows: state.datasets.daily.len(),
        hourly_rows: state.datasets.hourly.len(),
        first_date: span.map(|(first, _)| first),
        last_date: span.map(|(_, last)| last),
    }))
}

// =============================================================================
// Visualization endpoint
// =============================================================================

/// Resolve the requested range against the full daily span, validating
/// `start <= end` here at the boundary. Components downstream assume the
/// invariant.
fn resolve_range(query: &DateRangeQuery, datasets: &Datasets) -> Result<DateRange, AppError> {
    let (first, last) = datasets
        .date_span()
        .ok_or(AppError::Analysis(AnalysisError::NoData))?;
    let start = query.start.unwrap_or(first);
    let end = query.end.unwrap_or(last);
    Ok(DateRange::new(start, end)?)
}

/// GET /v1/visualizations/{mode}
///
/// Render the panels of one dashboard visualization. `start`/`end`
/// default to the full daily span; the `regression` mode ignores them.
pub async fn get_visualization(
    State(state): State<AppState>,
    Path(mode): Path<Visualization>,
    Query(query): Query<DateRangeQuery>,
) -> HandlerResult<VisualizationData> {
    let range = resolve_range(&query, &state.datasets)?;
    let panels = render_visualization(&state.datasets, &range, mode)?;

    Ok(Json(VisualizationData {
        visualization: mode,
        panels,
    }))
}
