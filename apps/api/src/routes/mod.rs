pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::profile::handlers::handle_analyze_profile;
use crate::state::AppState;
use crate::talent::handlers::handle_match_users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Talent search
        .route("/api/match-users", post(handle_match_users))
        // Deep dives
        .route("/api/analyze-profile", post(handle_analyze_profile))
        .route("/api/analyze", post(handle_analyze))
        .with_state(state)
}
