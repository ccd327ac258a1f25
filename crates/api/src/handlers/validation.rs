//! Dry-run validation of candidate business records.

use axum::Json;
use bizdir_core::validation::{validate_businesses, ValidationOutcome};
use serde_json::Value;

use crate::error::AppResult;

/// POST /api/businesses/validate
///
/// Validate a JSON array of candidate records without storing anything.
/// Returns `{ "validBusinesses": [...], "errors": [...] }`; a body that is
/// not an array is rejected with 400.
pub async fn validate(Json(input): Json<Value>) -> AppResult<Json<ValidationOutcome>> {
    let outcome = validate_businesses(input)?;
    tracing::debug!(
        accepted = outcome.valid_businesses.len(),
        rejected = outcome.rejected_count(),
        "Validated business batch"
    );
    Ok(Json(outcome))
}
