//! Blueprint route handlers.

use archlens_core::blueprint::{self, model::BlueprintRating};
use archlens_core::ArchLensError;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path},
    Json,
};
use serde_json::Value;
use tracing::{error, info};

use crate::error::{ApiError, ApiResult};

/// POST /api/blueprints/{id}/rate - Rate a blueprint from 1 to 5.
///
/// The body is parsed by hand so a malformed payload is reported as a
/// server error rather than axum's default rejection.
pub async fn rate_blueprint(
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<BlueprintRating>> {
    let Path(id) = path?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(blueprint_id = %id, error = %e, "Failed to parse rating body");
        ApiError::internal("Failed to update rating")
    })?;

    match blueprint::rate_blueprint(&id, &payload) {
        Ok(ack) => {
            info!(blueprint_id = %id, rating = ack.rating, "Blueprint rated");
            Ok(Json(ack))
        }
        Err(ArchLensError::ValidationError(msg)) => Err(ApiError::BadRequest(msg)),
        Err(e) => {
            error!(blueprint_id = %id, error = %e, "Failed to update rating");
            Err(ApiError::internal("Failed to update rating"))
        }
    }
}
