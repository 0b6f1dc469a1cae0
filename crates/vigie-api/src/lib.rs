//! vigie-api
//!
//! HTTP surface for the preventive-care engine: health and rule catalog
//! endpoints, recommendations, full assessments and LLM summary composition.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with logging and CORS layers applied.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/rules", get(routes::rules::list_rules))
        .route("/rules/{id}", get(routes::rules::get_rule_detail))
        .route(
            "/recommendations",
            post(routes::recommendations::create_recommendations),
        )
        .route("/assessment", post(routes::assessment::create_assessment))
        .route("/summary", post(routes::summary::create_summary))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(cors)
        .with_state(state)
}
