//! Repo Matcher: picks the one repository of a developer that best fits the requirements.
//!
//! score = 10 × keyword hits in "name description topics"
//!       + stars / 10 (capped at 20)
//!       + 10 if updated after 2023-01-01
//!       + 15 if the repository language is named in the requirements

use crate::github::models::Repository;
use crate::talent::keywords::extract_keywords;
use crate::talent::scoring::is_recent;

const KEYWORD_HIT_POINTS: f64 = 10.0;
const STAR_CAP: f64 = 20.0;
const RECENT_POINTS: f64 = 10.0;
const LANGUAGE_POINTS: f64 = 15.0;

/// Highest-scoring repository, or `None` if the list is empty or nothing scores above 0.
/// Ties keep the earliest repository.
pub fn pick_best<'r>(repos: &'r [Repository], requirements: &str) -> Option<&'r Repository> {
    let requirements_lower = requirements.to_lowercase();
    let keywords = extract_keywords(requirements);

    let mut best: Option<&Repository> = None;
    let mut best_score = 0.0;
    for repo in repos {
        let score = repo_score(repo, &keywords, &requirements_lower);
        if score > best_score {
            best_score = score;
            best = Some(repo);
        }
    }
    best
}

pub fn repo_score(repo: &Repository, keywords: &[String], requirements_lower: &str) -> f64 {
    let text = format!(
        "{} {} {}",
        repo.name,
        repo.description.as_deref().unwrap_or(""),
        repo.topics.join(" ")
    )
    .to_lowercase();

    let hits = keywords
        .iter()
        .filter(|k| text.contains(&k.to_lowercase()))
        .count() as f64;

    let mut score = hits * KEYWORD_HIT_POINTS;
    score += (repo.stargazers_count as f64 / 10.0).min(STAR_CAP);
    if is_recent(&repo.updated_at) {
        score += RECENT_POINTS;
    }
    if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
        if requirements_lower.contains(&language.to_lowercase()) {
            score += LANGUAGE_POINTS;
        }
    }
    score
}
