//! Candidate Aggregator: walks keyword search results, enriches each new repository
//! owner, scores them and keeps the admitted ones.
//!
//! Strictly sequential: one upstream call at a time, with a throttle between candidates.
//! Any per-keyword or per-candidate failure is logged and skipped.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::github::models::{GitHubUser, Repository};
use crate::github::CodeHost;
use crate::talent::models::{Candidate, TopRepo};
use crate::talent::scoring::{score_candidate, ADMISSION_THRESHOLD};
use crate::talent::search::search_keyword;

/// Hard cap on candidates returned by one search.
pub const MAX_CANDIDATES: usize = 100;
/// Repositories fetched per candidate for scoring.
pub const REPOS_PER_CANDIDATE: u8 = 10;

const TOP_REPO_LIMIT: usize = 3;
const SKILL_LIMIT: usize = 10;
const LANGUAGE_LIMIT: usize = 5;

/// Minimum spacing between per-candidate enrichments, protecting the upstream rate limit.
/// The default policy does not pause.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrottlePolicy {
    pub min_spacing: Duration,
}

impl ThrottlePolicy {
    pub fn new(min_spacing: Duration) -> Self {
        Self { min_spacing }
    }

    async fn pause(&self) {
        if !self.min_spacing.is_zero() {
            tokio::time::sleep(self.min_spacing).await;
        }
    }
}

pub struct CandidateAggregator<'a> {
    host: &'a dyn CodeHost,
    throttle: ThrottlePolicy,
}

impl<'a> CandidateAggregator<'a> {
    pub fn new(host: &'a dyn CodeHost, throttle: ThrottlePolicy) -> Self {
        Self { host, throttle }
    }

    /// Returns admitted candidates, highest score first (ties keep discovery order),
    /// at most `MAX_CANDIDATES`, each handle at most once.
    pub async fn aggregate(&self, keywords: &[String]) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = Vec::new();
        // Owners whose evaluation completed, admitted or not. Scores are deterministic, so
        // a rejected owner seen again under another keyword would be rejected again.
        // Owners whose fetch failed stay out of this set and are retried on a later hit.
        let mut evaluated: HashSet<String> = HashSet::new();

        'keywords: for keyword in keywords {
            let hits = search_keyword(self.host, keyword).await;

            for hit in hits {
                let handle = hit.owner.login.to_lowercase();
                if evaluated.contains(&handle) {
                    continue;
                }

                let candidate = match self.evaluate(&hit.owner.login, keywords).await {
                    Evaluation::Unavailable => continue,
                    Evaluation::Ineligible => {
                        evaluated.insert(handle);
                        continue;
                    }
                    Evaluation::Scored(candidate) => {
                        evaluated.insert(handle);
                        candidate
                    }
                };

                if candidate.match_score >= ADMISSION_THRESHOLD {
                    debug!(
                        "Admitted {} with score {}",
                        candidate.username, candidate.match_score
                    );
                    candidates.push(candidate);
                    if candidates.len() >= MAX_CANDIDATES {
                        info!("Reached the {MAX_CANDIDATES}-candidate cap, stopping search");
                        break 'keywords;
                    }
                }

                self.throttle.pause().await;
            }
        }

        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        candidates.truncate(MAX_CANDIDATES);

        info!(
            "Aggregated {} candidates from {} evaluated owners across {} keywords",
            candidates.len(),
            evaluated.len(),
            keywords.len()
        );
        candidates
    }

    /// Fetches and scores one owner.
    async fn evaluate(&self, login: &str, keywords: &[String]) -> Evaluation {
        let profile = match self.host.fetch_user(login).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Could not fetch profile for {login}, skipping: {e}");
                return Evaluation::Unavailable;
            }
        };

        if profile.is_organization() {
            debug!("Skipping organization {login}");
            return Evaluation::Ineligible;
        }

        let mut repos = match self
            .host
            .list_user_repos(&profile.login, REPOS_PER_CANDIDATE)
            .await
        {
            Ok(repos) => repos,
            Err(e) => {
                warn!("Could not list repositories for {login}, skipping: {e}");
                return Evaluation::Unavailable;
            }
        };
        repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

        let score = score_candidate(&repos, &profile, keywords);
        Evaluation::Scored(build_candidate(profile, &repos, score))
    }
}

enum Evaluation {
    Scored(Candidate),
    /// Organizations never become candidates.
    Ineligible,
    /// An upstream call failed; a later hit for the same owner tries again.
    Unavailable,
}

/// Assembles the result card for a scored profile. `repos` must be sorted by stars.
pub fn build_candidate(profile: GitHubUser, repos: &[Repository], match_score: u8) -> Candidate {
    let public_email = profile
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);
    let email_is_placeholder = public_email.is_none();
    let email = public_email.unwrap_or_else(|| placeholder_email(&profile.login));

    Candidate {
        id: profile.id.to_string(),
        name: profile.display_name().to_string(),
        linkedin_guess: linkedin_guess(&profile.login),
        email,
        email_is_placeholder,
        avatar: profile.avatar_url,
        bio: profile.bio.unwrap_or_default(),
        location: profile.location.unwrap_or_default(),
        github: profile.html_url,
        repositories: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
        match_score,
        skills: skills_from_repos(repos),
        top_languages: top_languages(repos),
        top_repos: repos
            .iter()
            .take(TOP_REPO_LIMIT)
            .map(|r| TopRepo {
                name: r.name.clone(),
                description: r.description.clone().unwrap_or_default(),
                language: r.language.clone().unwrap_or_default(),
                stars: r.stargazers_count,
            })
            .collect(),
        username: profile.login,
    }
}

/// Non-routable contact string standing in for a missing public email.
pub fn placeholder_email(login: &str) -> String {
    format!("{login}@github.local")
}

/// Unverified professional-network URL built from the handle.
pub fn linkedin_guess(login: &str) -> String {
    format!("https://linkedin.com/in/{login}")
}

/// Languages and topics in first-seen order.
fn skills_from_repos(repos: &[Repository]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for repo in repos {
        for skill in repo.language.iter().chain(repo.topics.iter()) {
            if !skill.is_empty() && !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }
    }
    skills.truncate(SKILL_LIMIT);
    skills
}

/// Languages ranked by how many repositories use them; ties keep first appearance.
fn top_languages(repos: &[Repository]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_ref()) {
        if language.is_empty() {
            continue;
        }
        let count = counts.entry(language.clone()).or_insert(0);
        if *count == 0 {
            order.push(language.clone());
        }
        *count += 1;
    }
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(LANGUAGE_LIMIT);
    order
}
