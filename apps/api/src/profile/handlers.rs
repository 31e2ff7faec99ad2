//! Axum route handlers for the profile deep dive.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::profile::analyzer::analyze_profile;
use crate::profile::models::{AnalyzeProfileRequest, AnalyzeProfileResponse};
use crate::state::AppState;

/// POST /api/analyze-profile
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AnalyzeProfileRequest>,
) -> Result<Json<AnalyzeProfileResponse>, AppError> {
    let username = request.username.trim();
    if username.is_empty() || request.requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and requirements are required".to_string(),
        ));
    }

    let host = state.code_host()?;
    let analysis = analyze_profile(
        host.as_ref(),
        state.oracle.as_deref(),
        username,
        &request.requirements,
    )
    .await?;

    Ok(Json(AnalyzeProfileResponse {
        success: true,
        analysis,
    }))
}
