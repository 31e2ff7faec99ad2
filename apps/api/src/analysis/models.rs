use serde::{Deserialize, Serialize};

use crate::profile::models::Complexity;

/// `github.com/{owner}/{repo}` coordinates parsed from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

/// A dependency manifest found at the repository root.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFile {
    pub name: String,
    pub content: String,
    /// Ecosystem the manifest belongs to, e.g. "Rust" for `Cargo.toml`.
    pub ecosystem: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommitSummary {
    pub message: String,
    pub date: String,
}

/// Everything gathered about one repository before evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySnapshot {
    pub name: String,
    pub description: String,
    pub language: String,
    /// Ranked by byte count, largest first.
    pub languages: Vec<(String, u64)>,
    pub topics: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    pub readme: String,
    pub files: Vec<KeyFile>,
    pub commits: Vec<CommitSummary>,
}

impl RepositorySnapshot {
    pub fn language_names(&self) -> Vec<String> {
        self.languages.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Fit of one repository against job requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub match_score: u8,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub technical_skills: Vec<String>,
    pub project_complexity: Complexity,
}

/// Oracle answer as parsed; every field is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    pub match_score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub technical_skills: Vec<String>,
    pub project_complexity: Complexity,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryOverview {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
}

impl From<&RepositorySnapshot> for RepositoryOverview {
    fn from(snapshot: &RepositorySnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            language: snapshot.language.clone(),
            stars: snapshot.stars,
            forks: snapshot.forks,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub job_requirements: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisResult,
    pub repository: RepositoryOverview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_analysis_rejects_missing_fields() {
        let missing_gaps = r#"{
            "matchScore": 70,
            "strengths": ["Go"],
            "recommendations": [],
            "summary": "ok",
            "technicalSkills": ["Go"],
            "projectComplexity": "Intermediate"
        }"#;
        assert!(serde_json::from_str::<RawAnalysis>(missing_gaps).is_err());
    }

    #[test]
    fn test_raw_analysis_rejects_wrong_types() {
        let string_score = r#"{
            "matchScore": "high",
            "strengths": [], "gaps": [], "recommendations": [],
            "summary": "ok", "technicalSkills": [], "projectComplexity": "Beginner"
        }"#;
        assert!(serde_json::from_str::<RawAnalysis>(string_score).is_err());

        let unknown_band = r#"{
            "matchScore": 50,
            "strengths": [], "gaps": [], "recommendations": [],
            "summary": "ok", "technicalSkills": [], "projectComplexity": "Expert"
        }"#;
        assert!(serde_json::from_str::<RawAnalysis>(unknown_band).is_err());
    }

    #[test]
    fn test_analyze_request_reads_camel_case() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"githubUrl": "https://github.com/a/b", "jobRequirements": "Go"}"#,
        )
        .unwrap();
        assert_eq!(request.github_url, "https://github.com/a/b");
        assert_eq!(request.job_requirements, "Go");

        let empty: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.github_url.is_empty());
    }
}
