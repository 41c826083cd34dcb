//! Blueprint rating.
//!
//! Ratings are validated and acknowledged but not stored yet. Caller
//! identity, duplicate-rating prevention, persistence and recomputing the
//! blueprint average are still to be added.

pub mod model;

use serde_json::Value;

use crate::error::{ArchLensError, ArchLensResult};
use model::BlueprintRating;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

pub const RATING_UPDATED_MESSAGE: &str = "Rating updated successfully";

/// Validate the `rating` field of a request body and acknowledge it.
///
/// The rating must be a whole number in `MIN_RATING..=MAX_RATING`; `5` and
/// `5.0` are the same rating.
pub fn rate_blueprint(id: &str, body: &Value) -> ArchLensResult<BlueprintRating> {
    let rating = body
        .get("rating")
        .and_then(whole_number)
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| {
            ArchLensError::validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            ))
        })?;

    Ok(BlueprintRating {
        id: id.to_string(),
        rating,
        message: RATING_UPDATED_MESSAGE.to_string(),
    })
}

fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && (MIN_RATING as f64..=MAX_RATING as f64).contains(f))
            .map(|f| f as i64)
    })
}
