use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{cors_middleware, logging_middleware};
use super::state::AppState;
use super::team_names;
use super::types::ApiError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Team names
        .route(
            "/teamnames",
            get(team_names::list_team_names).post(team_names::add_team_name),
        )
        .route("/teamnames/{name}", get(team_names::get_team_name))
        // Team form forwarding
        .route("/teamform", post(team_names::submit_team_form))
        .route("/teamform/", post(team_names::submit_team_form))
        .fallback(not_found)
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
