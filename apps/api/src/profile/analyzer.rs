//! Profile deep dive for one developer.
//!
//! Flow: user → up to 30 repositories → best-matching repository → code review,
//!       plus deterministic skills and project summaries over the same repository list.
//!
//! Only the user and repository-list fetches can fail the request.

use tracing::info;

use crate::errors::AppError;
use crate::github::CodeHost;
use crate::llm_client::Oracle;
use crate::profile::assessment::{assess_skills, summarize_projects};
use crate::profile::code_review::review_repository;
use crate::profile::models::{BestRepo, CodeQualityAnalysis, DeveloperProfile, ProfileAnalysis};
use crate::profile::repo_matcher::pick_best;

const PROFILE_REPOS: u8 = 30;

pub async fn analyze_profile(
    host: &dyn CodeHost,
    oracle: Option<&dyn Oracle>,
    username: &str,
    requirements: &str,
) -> Result<ProfileAnalysis, AppError> {
    let user = host
        .fetch_user(username)
        .await
        .map_err(|e| AppError::Upstream(format!("User not found: {e}")))?;
    let repos = host
        .list_user_repos(&user.login, PROFILE_REPOS)
        .await
        .map_err(|e| AppError::Upstream(format!("Repositories not found: {e}")))?;

    let best = pick_best(&repos, requirements);
    let code_quality_analysis = match best {
        Some(repo) => review_repository(host, oracle, &user.login, repo, requirements).await,
        None => CodeQualityAnalysis::unreviewed(),
    };

    info!(
        "Analyzed {} ({} repositories, best match: {})",
        user.login,
        repos.len(),
        best.map(|r| r.name.as_str()).unwrap_or("none")
    );

    Ok(ProfileAnalysis {
        developer: DeveloperProfile::from(&user),
        best_matching_repo: best.map(BestRepo::from).unwrap_or_else(BestRepo::none_found),
        code_quality_analysis,
        skills_assessment: assess_skills(&repos, &user),
        project_summary: summarize_projects(&repos),
    })
}
