//! Dashboard route handler.

use archlens_core::analysis::model::DashboardStats;
use axum::{extract::State, Json};
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/dashboard - Aggregate stats for the dashboard.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let stats = state.service.get_dashboard_stats().await.map_err(|e| {
        error!(error = %e, "Failed to fetch dashboard stats");
        ApiError::internal_with_details("Failed to fetch dashboard stats", &e)
    })?;

    Ok(Json(stats))
}
