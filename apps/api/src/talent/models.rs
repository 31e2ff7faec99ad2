use serde::{Deserialize, Serialize};

/// Structured view of free-text requirements, from the oracle or the keyword fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsSummary {
    pub essential_skills: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "Developer".to_string()
}

impl RequirementsSummary {
    /// Summary built from dictionary keywords alone.
    pub fn from_keywords(keywords: Vec<String>) -> Self {
        Self {
            essential_skills: keywords.clone(),
            tech_stack: keywords,
            expertise: vec![],
            role: default_role(),
        }
    }
}

/// One of a candidate's strongest repositories, as shown on a result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRepo {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
}

/// A discovered developer with a deterministic match score.
///
/// `email` is either the public profile email or a `{handle}@github.local` placeholder;
/// `linkedin_guess` is an unverified URL built from the handle. Neither is a checked contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub email_is_placeholder: bool,
    pub linkedin_guess: String,
    pub github: String,
    pub repositories: u32,
    pub followers: u32,
    pub following: u32,
    pub match_score: u8,
    pub skills: Vec<String>,
    pub top_languages: Vec<String>,
    pub top_repos: Vec<TopRepo>,
}

/// A candidate plus the cosmetic fields the UI shows but nothing computes.
#[derive(Debug, Clone, Serialize)]
pub struct DecoratedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Randomly picked availability blurb. Not derived from any data.
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchUsersRequest {
    #[serde(default)]
    pub requirements: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUsersResponse {
    pub success: bool,
    pub developers: Vec<DecoratedCandidate>,
    pub query: String,
    pub summary: RequirementsSummary,
    /// Placeholder counter for the UI. Not a measurement of work performed.
    pub total_analyzed: u32,
}
