//! Axum route handlers for single-repository analysis.

use axum::{extract::State, Json};
use tracing::info;

use crate::analysis::evaluator::evaluate;
use crate::analysis::models::{AnalyzeRequest, AnalyzeResponse, RepositoryOverview};
use crate::analysis::snapshot::{fetch_snapshot, parse_github_url};
use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.github_url.trim().is_empty() || request.job_requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "GitHub URL and job requirements are required".to_string(),
        ));
    }

    let host = state.code_host()?;
    let coordinates = parse_github_url(request.github_url.trim())?;
    info!("Analyzing {}/{}", coordinates.owner, coordinates.repo);

    let snapshot = fetch_snapshot(host.as_ref(), &coordinates).await?;
    let data = evaluate(state.oracle.as_deref(), &snapshot, &request.job_requirements).await;

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
        repository: RepositoryOverview::from(&snapshot),
    }))
}
