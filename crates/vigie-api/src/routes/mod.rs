pub mod assessment;
pub mod health;
pub mod recommendations;
pub mod rules;
pub mod summary;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use vigie_core::models::intake::IntakeProfile;

use crate::error::ApiError;

/// Normalise a request body into an intake profile.
///
/// Malformed JSON and non-object bodies are rejected; field-level problems
/// are defaulted by the lenient intake model.
pub(crate) fn intake_from(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<IntakeProfile, ApiError> {
    let Json(value) = payload?;
    Ok(IntakeProfile::from_value(value)?)
}
