use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use vigie_core::models::recommendation::Category;
use vigie_engine::Rule;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RuleSummary {
    id: String,
    name: String,
    category: Category,
}

impl RuleSummary {
    fn from_rule(rule: &dyn Rule) -> Self {
        Self {
            id: rule.id().to_string(),
            name: rule.name().to_string(),
            category: rule.category(),
        }
    }
}

/// The catalog in emission order.
pub async fn list_rules(State(state): State<AppState>) -> Json<Vec<RuleSummary>> {
    let rules = state
        .engine
        .rules()
        .iter()
        .map(|r| RuleSummary::from_rule(r.as_ref()))
        .collect();
    Json(rules)
}

pub async fn get_rule_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RuleSummary>, ApiError> {
    let rule = state
        .engine
        .rules()
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| ApiError::NotFound(format!("rule not found: {id}")))?;

    Ok(Json(RuleSummary::from_rule(rule.as_ref())))
}
