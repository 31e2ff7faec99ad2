//! Oracle code review of a developer's best-matching repository.
//!
//! The review only sees the README (first 2000 characters) and the root file listing.
//! Without a usable answer the result is `CodeQualityAnalysis::fallback()`.

use tracing::{info, warn};

use crate::github::models::Repository;
use crate::github::CodeHost;
use crate::llm_client::{ask_json, CallOptions, LlmError, Oracle};
use crate::profile::models::CodeQualityAnalysis;
use crate::profile::prompts::{code_review_system, CODE_REVIEW_PROMPT_TEMPLATE};

const README_PREVIEW_CHARS: usize = 2000;
const REVIEW_OPTIONS: CallOptions = CallOptions {
    max_tokens: 1000,
    temperature: 0.3,
};

/// Fetches the repository's README and root listing (both optional) and asks for a review.
pub async fn review_repository(
    host: &dyn CodeHost,
    oracle: Option<&dyn Oracle>,
    owner: &str,
    repo: &Repository,
    requirements: &str,
) -> CodeQualityAnalysis {
    let files: Vec<String> = match host.repo_contents(owner, &repo.name).await {
        Ok(entries) => entries
            .into_iter()
            .map(|e| match e.entry_type.as_str() {
                "dir" => format!("{}/", e.name),
                _ => e.name,
            })
            .collect(),
        Err(e) => {
            warn!("No file listing for {owner}/{}: {e}", repo.name);
            vec![]
        }
    };
    let readme = host
        .repo_readme(owner, &repo.name)
        .await
        .unwrap_or_default();

    let Some(oracle) = oracle else {
        return CodeQualityAnalysis::fallback();
    };

    match ask_review(oracle, &readme, &files, requirements).await {
        Ok(review) => {
            info!(
                "Oracle reviewed {owner}/{}: score {}",
                repo.name, review.overall_score
            );
            review
        }
        Err(e) => {
            warn!("Code review for {owner}/{} failed, using default review: {e}", repo.name);
            CodeQualityAnalysis::fallback()
        }
    }
}

async fn ask_review(
    oracle: &dyn Oracle,
    readme: &str,
    files: &[String],
    requirements: &str,
) -> Result<CodeQualityAnalysis, LlmError> {
    let prompt = CODE_REVIEW_PROMPT_TEMPLATE
        .replace("{requirements}", requirements)
        .replace("{readme}", &preview(readme, README_PREVIEW_CHARS))
        .replace("{files}", &files.join(", "));

    let review: CodeQualityAnalysis =
        ask_json(oracle, &code_review_system(), &prompt, REVIEW_OPTIONS).await?;
    if review.overall_score > 100 {
        return Err(LlmError::Invalid(format!(
            "overallScore {} out of range",
            review.overall_score
        )));
    }
    Ok(review)
}

/// First `limit` characters of `text`, never splitting a UTF-8 sequence.
pub fn preview(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
