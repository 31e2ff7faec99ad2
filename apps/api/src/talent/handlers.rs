//! Axum route handlers for the talent search API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::talent::decoration::{decorate, total_analyzed};
use crate::talent::models::{MatchUsersRequest, MatchUsersResponse};
use crate::talent::pipeline::match_developers;

/// POST /api/match-users
///
/// Runs one full search-and-score pass for the given requirements. Only missing input
/// or missing credentials fail; upstream trouble just yields fewer candidates.
pub async fn handle_match_users(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<MatchUsersRequest>,
) -> Result<Json<MatchUsersResponse>, AppError> {
    if request.requirements.trim().is_empty() {
        return Err(AppError::Validation("Requirements are required".to_string()));
    }

    let host = state.code_host()?;

    let outcome = match_developers(
        host.as_ref(),
        &state.summarizer,
        state.throttle,
        &request.requirements,
    )
    .await;

    Ok(Json(MatchUsersResponse {
        success: true,
        developers: decorate(outcome.candidates, state.entropy.as_ref()),
        query: request.requirements,
        summary: outcome.summary,
        total_analyzed: total_analyzed(state.entropy.as_ref()),
    }))
}
