//! Blueprint domain models.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned for an accepted blueprint rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintRating {
    pub id: String,
    pub rating: i64,
    pub message: String,
}
