use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use vigie_engine::Assessment;

use super::intake_from;
use crate::error::ApiError;
use crate::state::AppState;

/// Metrics, risk flags and recommendations for one intake.
pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let profile = intake_from(payload)?;
    Ok(Json(state.engine.assess(&profile, state.as_of())))
}
