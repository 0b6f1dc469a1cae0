use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use vigie_core::models::recommendation::Recommendation;

use super::intake_from;
use crate::error::ApiError;
use crate::state::AppState;

/// Ordered, validated recommendations for one intake.
pub async fn create_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let profile = intake_from(payload)?;
    Ok(Json(state.engine.recommend(&profile, state.as_of())))
}
