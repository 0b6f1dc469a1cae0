use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;
use vigie_core::models::intake::IntakeProfile;
use vigie_summary::context::SupportingDocument;
use vigie_summary::prompt::{Prompt, build_prompt};
use vigie_summary::render::compose_summary;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub prompt: Prompt,
}

/// Render the structured summary and the prompt pair for the narrative model.
///
/// The body is the intake object, optionally carrying a `documents` array of
/// `{filename, text}` entries. A malformed `documents` value is ignored.
pub async fn create_summary(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(mut body) = payload?;

    let documents: Vec<SupportingDocument> = match body.as_object_mut() {
        Some(fields) => fields
            .remove("documents")
            .map(|raw| {
                serde_json::from_value(raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "ignoring malformed documents");
                    Vec::new()
                })
            })
            .unwrap_or_default(),
        None => Vec::new(),
    };

    let profile = IntakeProfile::from_value(body)?;
    let assessment = state.engine.assess(&profile, state.as_of());
    let summary = compose_summary(&profile, &assessment.metrics, &assessment.flags)?;
    let prompt = build_prompt(&summary, &documents);

    tracing::info!(documents = documents.len(), "summary composed");

    Ok(Json(SummaryResponse { summary, prompt }))
}
