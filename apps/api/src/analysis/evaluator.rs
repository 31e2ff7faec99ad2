//! Repository evaluation: oracle assessment with a deterministic fallback.
//!
//! An oracle answer is used only if it parses with every field present and a score in
//! 0..=100. Anything else goes to `fallback_analysis`.

use tracing::{info, warn};

use crate::analysis::models::{AnalysisResult, RawAnalysis, RepositorySnapshot};
use crate::analysis::prompts::{analysis_system, ANALYSIS_PROMPT_TEMPLATE};
use crate::llm_client::{ask_json, CallOptions, LlmError, Oracle};
use crate::profile::code_review::preview;
use crate::profile::models::Complexity;

const README_PREVIEW_CHARS: usize = 1000;
const MANIFEST_PREVIEW_CHARS: usize = 500;
const ANALYSIS_OPTIONS: CallOptions = CallOptions {
    max_tokens: 2000,
    temperature: 0.3,
};

const POPULAR_LANGUAGES: [&str; 6] = ["JavaScript", "TypeScript", "Python", "Java", "Go", "Rust"];
const BASE_SCORE: u32 = 60;

pub async fn evaluate(
    oracle: Option<&dyn Oracle>,
    snapshot: &RepositorySnapshot,
    job_requirements: &str,
) -> AnalysisResult {
    let Some(oracle) = oracle else {
        return fallback_analysis(snapshot);
    };

    match ask_analysis(oracle, snapshot, job_requirements).await {
        Ok(result) => {
            info!("Oracle scored {} at {}", snapshot.name, result.match_score);
            result
        }
        Err(e) => {
            warn!("Oracle analysis of {} failed, using fallback: {e}", snapshot.name);
            fallback_analysis(snapshot)
        }
    }
}

async fn ask_analysis(
    oracle: &dyn Oracle,
    snapshot: &RepositorySnapshot,
    job_requirements: &str,
) -> Result<AnalysisResult, LlmError> {
    let prompt = render_prompt(snapshot, job_requirements);
    let raw: RawAnalysis =
        ask_json(oracle, &analysis_system(), &prompt, ANALYSIS_OPTIONS).await?;

    if !raw.match_score.is_finite() || !(0.0..=100.0).contains(&raw.match_score) {
        return Err(LlmError::Invalid(format!(
            "matchScore {} out of range",
            raw.match_score
        )));
    }

    Ok(AnalysisResult {
        match_score: raw.match_score.round() as u8,
        strengths: raw.strengths,
        gaps: raw.gaps,
        recommendations: raw.recommendations,
        summary: raw.summary,
        technical_skills: raw.technical_skills,
        project_complexity: raw.project_complexity,
    })
}

fn render_prompt(snapshot: &RepositorySnapshot, job_requirements: &str) -> String {
    let commits: Vec<String> = snapshot
        .commits
        .iter()
        .map(|c| match c.date.get(..10) {
            Some(day) => format!("{} ({day})", c.message.trim()),
            None => c.message.trim().to_string(),
        })
        .collect();
    let files: Vec<String> = snapshot
        .files
        .iter()
        .map(|f| format!("{} ({})", f.name, f.ecosystem))
        .collect();
    let manifests: Vec<String> = snapshot
        .files
        .iter()
        .map(|f| format!("--- {} ---\n{}", f.name, preview(&f.content, MANIFEST_PREVIEW_CHARS)))
        .collect();

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{name}", &snapshot.name)
        .replace("{description}", &snapshot.description)
        .replace("{language}", &snapshot.language)
        .replace("{languages}", &snapshot.language_names().join(", "))
        .replace("{topics}", &snapshot.topics.join(", "))
        .replace("{stars}", &snapshot.stars.to_string())
        .replace("{forks}", &snapshot.forks.to_string())
        .replace("{readme}", &preview(&snapshot.readme, README_PREVIEW_CHARS))
        .replace("{commits}", &commits.join("; "))
        .replace("{files}", &files.join(", "))
        .replace("{manifests}", &manifests.join("\n"))
        .replace("{requirements}", job_requirements)
}

/// Score = 60 + 15 (popular language) or 5, + 10 (more than 10 stars) or 5,
/// + 10 if any key manifest exists, capped at 100.
pub fn fallback_analysis(snapshot: &RepositorySnapshot) -> AnalysisResult {
    let languages = snapshot.language_names();
    let has_popular = languages
        .iter()
        .any(|l| POPULAR_LANGUAGES.contains(&l.as_str()));

    let language_bonus = if has_popular { 15 } else { 5 };
    let activity_bonus = if snapshot.stars > 10 { 10 } else { 5 };
    let manifest_bonus = if snapshot.files.is_empty() { 0 } else { 10 };
    let match_score = (BASE_SCORE + language_bonus + activity_bonus + manifest_bonus).min(100) as u8;

    let foundation = match match_score {
        75.. => "strong",
        60.. => "good",
        _ => "basic",
    };
    let plural = if languages.len() == 1 { "" } else { "s" };
    let purpose = if snapshot.description.is_empty() {
        "Could benefit from more detailed project description."
    } else {
        "Project has clear purpose and documentation."
    };

    AnalysisResult {
        match_score,
        strengths: vec![
            "Active GitHub presence with documented projects".to_string(),
            format!("Experience with {}", languages.join(", ")),
            if snapshot.stars > 0 {
                "Community engagement (starred repository)"
            } else {
                "Consistent development activity"
            }
            .to_string(),
            if snapshot.readme.is_empty() {
                "Project organization skills"
            } else {
                "Good documentation practices"
            }
            .to_string(),
        ],
        gaps: vec![
            "Detailed analysis requires manual review".to_string(),
            "Consider adding more comprehensive documentation".to_string(),
            "Portfolio could benefit from more diverse projects".to_string(),
        ],
        recommendations: vec![
            "Add detailed README files to showcase project scope".to_string(),
            "Include live demos or deployment links".to_string(),
            "Consider contributing to open source projects".to_string(),
            "Document your development process and decisions".to_string(),
        ],
        summary: format!(
            "Repository shows {foundation} technical foundation with {} programming language{plural} demonstrated. {purpose}",
            languages.len()
        ),
        project_complexity: match languages.len() {
            3.. => Complexity::Advanced,
            2 => Complexity::Intermediate,
            _ => Complexity::Beginner,
        },
        technical_skills: languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{CommitSummary, KeyFile};
    use crate::llm_client::scripted::ScriptedOracle;

    fn snapshot() -> RepositorySnapshot {
        RepositorySnapshot {
            name: "operator".to_string(),
            description: "Kubernetes operator for Postgres".to_string(),
            language: "Go".to_string(),
            languages: vec![("Go".to_string(), 9_000), ("Shell".to_string(), 300)],
            topics: vec!["kubernetes".to_string()],
            stars: 120,
            forks: 9,
            readme: "# operator".to_string(),
            files: vec![KeyFile {
                name: "go.mod".to_string(),
                content: "module example.com/operator".to_string(),
                ecosystem: "Go",
            }],
            commits: vec![CommitSummary {
                message: "Add leader election".to_string(),
                date: "2024-05-01T12:00:00Z".to_string(),
            }],
        }
    }

    fn bare() -> RepositorySnapshot {
        RepositorySnapshot {
            name: "scratch".to_string(),
            description: String::new(),
            language: String::new(),
            languages: vec![("Haskell".to_string(), 10)],
            topics: vec![],
            stars: 0,
            forks: 0,
            readme: String::new(),
            files: vec![],
            commits: vec![],
        }
    }

    const ANSWER: &str = r#"```json
{
  "matchScore": 84.6,
  "strengths": ["Operator pattern"],
  "gaps": ["No AWS usage"],
  "recommendations": ["Add e2e tests"],
  "summary": "Strong Kubernetes work",
  "technicalSkills": ["Go", "Kubernetes"],
  "projectComplexity": "Advanced"
}
```"#;

    #[tokio::test]
    async fn test_valid_oracle_answer_is_used() {
        let oracle = ScriptedOracle::answering(ANSWER);
        let result = evaluate(Some(&oracle), &snapshot(), "Go and Kubernetes").await;

        assert_eq!(result.match_score, 85);
        assert_eq!(result.gaps, vec!["No AWS usage"]);
        assert_eq!(result.project_complexity, Complexity::Advanced);

        let prompt = &oracle.prompts()[0];
        assert!(prompt.contains("- Languages Used: Go, Shell"));
        assert!(prompt.contains("- Recent Commits: Add leader election (2024-05-01)"));
        assert!(prompt.contains("- Key Files: go.mod (Go)"));
        assert!(prompt.contains("--- go.mod ---\nmodule example.com/operator"));
        assert!(prompt.contains("Go and Kubernetes"));
        assert!(!prompt.contains("{name}"));
    }

    #[tokio::test]
    async fn test_incomplete_answer_falls_back() {
        let oracle = ScriptedOracle::answering(r#"{"matchScore": 90, "summary": "great"}"#);
        let result = evaluate(Some(&oracle), &snapshot(), "Go").await;
        assert_eq!(result, fallback_analysis(&snapshot()));
    }

    #[tokio::test]
    async fn test_out_of_range_score_falls_back() {
        let oracle = ScriptedOracle::answering(&ANSWER.replace("84.6", "140"));
        let result = evaluate(Some(&oracle), &snapshot(), "Go").await;
        assert_eq!(result, fallback_analysis(&snapshot()));
    }

    #[tokio::test]
    async fn test_oracle_error_falls_back() {
        let oracle = ScriptedOracle::failing(500);
        let result = evaluate(Some(&oracle), &snapshot(), "Go").await;
        assert_eq!(result.match_score, 95);
    }

    #[tokio::test]
    async fn test_without_oracle_falls_back() {
        let result = evaluate(None, &bare(), "Go").await;
        assert_eq!(result.match_score, 70);
    }

    #[test]
    fn test_fallback_for_popular_active_repository() {
        let result = fallback_analysis(&snapshot());

        // 60 + 15 + 10 + 10
        assert_eq!(result.match_score, 95);
        assert_eq!(result.technical_skills, vec!["Go", "Shell"]);
        assert_eq!(result.project_complexity, Complexity::Intermediate);
        assert_eq!(result.strengths[1], "Experience with Go, Shell");
        assert_eq!(result.strengths[2], "Community engagement (starred repository)");
        assert_eq!(result.strengths[3], "Good documentation practices");
        assert_eq!(
            result.summary,
            "Repository shows strong technical foundation with 2 programming languages demonstrated. \
             Project has clear purpose and documentation."
        );
        assert_eq!(result.gaps.len(), 3);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_fallback_for_bare_repository() {
        let result = fallback_analysis(&bare());

        // 60 + 5 + 5 + 0
        assert_eq!(result.match_score, 70);
        assert_eq!(result.project_complexity, Complexity::Beginner);
        assert_eq!(result.strengths[2], "Consistent development activity");
        assert_eq!(result.strengths[3], "Project organization skills");
        assert_eq!(
            result.summary,
            "Repository shows good technical foundation with 1 programming language demonstrated. \
             Could benefit from more detailed project description."
        );
    }

    #[test]
    fn test_fallback_complexity_from_language_count() {
        let mut polyglot = bare();
        polyglot.languages = vec![
            ("Rust".to_string(), 3),
            ("C".to_string(), 2),
            ("Python".to_string(), 1),
        ];
        let result = fallback_analysis(&polyglot);
        assert_eq!(result.project_complexity, Complexity::Advanced);
        assert_eq!(result.match_score, 80);
    }
}
