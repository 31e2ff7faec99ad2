//! Match Scoring: deterministic 0–100 score of a developer against a keyword set.
//!
//! Algorithm (additive):
//! 1. tech set = lower-cased primary language + topics of every repository
//! 2. keywords present but none fuzzy-matches the tech set → 0, no baseline
//! 3. base 60
//! 4. +5 per (keyword, tech entry) fuzzy match
//! 5. +2 per repository updated after 2023-01-01, capped at 10
//! 6. +total stars / 10, capped at 15
//! 7. +followers / 50, capped at 10
//! 8. +3 per keyword found in the bio
//! 9. clamp to [0, 100] and round

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::github::models::{GitHubUser, Repository};

/// Minimum score for a candidate to be listed.
pub const ADMISSION_THRESHOLD: u8 = 70;

/// 2023-01-01T00:00:00Z. Repositories updated after this count as active.
const RECENCY_CUTOFF_UNIX: i64 = 1_672_531_200;

const BASE_SCORE: f64 = 60.0;
const TECH_MATCH_POINTS: f64 = 5.0;
const RECENT_REPO_POINTS: f64 = 2.0;
const RECENCY_CAP: f64 = 10.0;
const STAR_CAP: f64 = 15.0;
const FOLLOWER_CAP: f64 = 10.0;
const BIO_MATCH_POINTS: f64 = 3.0;

/// Per-factor contributions, kept for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub technology: f64,
    pub recency: f64,
    pub popularity: f64,
    pub social: f64,
    pub bio: f64,
    pub total: u8,
}

pub fn is_recent(updated_at: &DateTime<Utc>) -> bool {
    updated_at.timestamp() > RECENCY_CUTOFF_UNIX
}

/// Bidirectional substring containment. Both sides must already be lower-case.
pub fn fuzzy_matches(keyword: &str, tech: &str) -> bool {
    tech.contains(keyword) || keyword.contains(tech)
}

pub fn score_candidate(repos: &[Repository], profile: &GitHubUser, keywords: &[String]) -> u8 {
    let parts = breakdown(repos, profile, keywords);
    debug!("Scored {}: {:?}", profile.login, parts);
    parts.total
}

pub fn breakdown(repos: &[Repository], profile: &GitHubUser, keywords: &[String]) -> MatchBreakdown {
    let tech_set = technology_set(repos);
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let any_overlap = keywords
        .iter()
        .any(|k| tech_set.iter().any(|t| fuzzy_matches(k, t)));
    if !keywords.is_empty() && !any_overlap {
        return MatchBreakdown::default();
    }

    let technology: f64 = keywords
        .iter()
        .map(|k| tech_set.iter().filter(|t| fuzzy_matches(k, t)).count() as f64)
        .sum::<f64>()
        * TECH_MATCH_POINTS;

    let recent = repos.iter().filter(|r| is_recent(&r.updated_at)).count() as f64;
    let recency = (recent * RECENT_REPO_POINTS).min(RECENCY_CAP);

    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count as u64).sum();
    let popularity = (total_stars as f64 / 10.0).min(STAR_CAP);

    let social = (profile.followers as f64 / 50.0).min(FOLLOWER_CAP);

    let bio = match profile.bio.as_deref().map(str::to_lowercase) {
        Some(bio) if !bio.is_empty() => {
            keywords.iter().filter(|k| bio.contains(k.as_str())).count() as f64
                * BIO_MATCH_POINTS
        }
        _ => 0.0,
    };

    let raw = BASE_SCORE + technology + recency + popularity + social + bio;

    MatchBreakdown {
        technology,
        recency,
        popularity,
        social,
        bio,
        total: raw.clamp(0.0, 100.0).round() as u8,
    }
}

/// Lower-cased languages and topics of every repository, blanks dropped.
/// Duplicates are kept: a language used in three repositories matches three times.
fn technology_set(repos: &[Repository]) -> Vec<String> {
    repos
        .iter()
        .flat_map(|r| {
            r.language
                .iter()
                .chain(r.topics.iter())
                .map(|t| t.trim().to_lowercase())
        })
        .filter(|t| !t.is_empty())
        .collect()
}
