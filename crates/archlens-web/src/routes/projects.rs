//! Project route handlers.
//!
//! A project in the dashboard is an analysis record.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// DELETE /api/projects/{id} - Delete a project.
pub async fn delete_project(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;

    let deleted = state.service.delete_analysis(&id).await.map_err(|e| {
        error!(project_id = %id, error = %e, "Failed to delete project");
        ApiError::internal_with_details("Failed to delete project", &e)
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    info!(project_id = %id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
