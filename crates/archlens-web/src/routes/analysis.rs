//! Analysis route handlers.

use archlens_core::analysis::model::Analysis;
use archlens_core::ArchLensResult;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::{debug, error};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const ID_REQUIRED: &str = "Analysis ID is required";

/// GET /api/analysis/{id} - Fetch a single analysis.
pub async fn get_analysis(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Analysis>> {
    let Path(id) = path?;

    if id.trim().is_empty() {
        return Err(ApiError::BadRequest(ID_REQUIRED.to_string()));
    }

    debug!(analysis_id = %id, "Fetching analysis");

    match fetch_analysis(&state, &id).await {
        Ok(Some(analysis)) => Ok(Json(analysis)),
        Ok(None) => {
            debug!(analysis_id = %id, "Analysis not found");
            Err(ApiError::NotFound("Analysis not found".to_string()))
        }
        Err(e) => {
            error!(analysis_id = %id, error = %e, "Failed to fetch analysis");
            Err(ApiError::internal("Failed to fetch analysis"))
        }
    }
}

async fn fetch_analysis(state: &AppState, id: &str) -> ArchLensResult<Option<Analysis>> {
    state.service.connect().await?;
    state.service.get_analysis_by_id(id).await
}

/// GET /api/analysis - Requests without an id segment.
pub async fn missing_analysis_id() -> ApiError {
    ApiError::BadRequest(ID_REQUIRED.to_string())
}
