//! Requirements Summarizer: structures free-text requirements via the oracle,
//! degrading to dictionary keywords whenever the oracle cannot be used.
//!
//! Two `RequirementsOracle` backends:
//! - `LlmRequirementsOracle`: live, unreliable.
//! - `KeywordFallback`: pure, deterministic, never fails.
//!
//! `RequirementsSummarizer` composes them try-then-fallback, so oracle failures never
//! leave this module.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::llm_client::{ask_json, CallOptions, LlmError, Oracle};
use crate::talent::keywords::extract_keywords;
use crate::talent::models::RequirementsSummary;
use crate::talent::prompts::{requirements_system, REQUIREMENTS_PROMPT_TEMPLATE};

const SUMMARY_OPTIONS: CallOptions = CallOptions {
    max_tokens: 1000,
    temperature: 0.1,
};

#[async_trait]
pub trait RequirementsOracle: Send + Sync {
    async fn summarize(&self, requirements: &str) -> Result<RequirementsSummary, LlmError>;
}

/// Asks the LLM for `{essentialSkills, techStack, expertise, role}`.
pub struct LlmRequirementsOracle {
    oracle: Arc<dyn Oracle>,
}

impl LlmRequirementsOracle {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl RequirementsOracle for LlmRequirementsOracle {
    async fn summarize(&self, requirements: &str) -> Result<RequirementsSummary, LlmError> {
        let prompt = REQUIREMENTS_PROMPT_TEMPLATE.replace("{requirements}", requirements);
        let raw: RequirementsSummary = ask_json(
            self.oracle.as_ref(),
            &requirements_system(),
            &prompt,
            SUMMARY_OPTIONS,
        )
        .await?;

        let summary = normalize(raw);
        if summary.essential_skills.is_empty() {
            return Err(LlmError::Invalid("no essential skills".to_string()));
        }
        Ok(summary)
    }
}

/// Dictionary-only summary: skills and stack are the extracted keywords.
pub struct KeywordFallback;

impl KeywordFallback {
    pub fn summary_for(&self, requirements: &str) -> RequirementsSummary {
        RequirementsSummary::from_keywords(extract_keywords(requirements))
    }
}

#[async_trait]
impl RequirementsOracle for KeywordFallback {
    async fn summarize(&self, requirements: &str) -> Result<RequirementsSummary, LlmError> {
        Ok(self.summary_for(requirements))
    }
}

/// Try-then-fallback composition of an optional live oracle and `KeywordFallback`.
#[derive(Clone)]
pub struct RequirementsSummarizer {
    oracle: Option<Arc<dyn RequirementsOracle>>,
}

impl RequirementsSummarizer {
    pub fn new(oracle: Option<Arc<dyn RequirementsOracle>>) -> Self {
        Self { oracle }
    }

    pub fn fallback_only() -> Self {
        Self { oracle: None }
    }

    pub async fn summarize(&self, requirements: &str) -> RequirementsSummary {
        let Some(oracle) = &self.oracle else {
            return KeywordFallback.summary_for(requirements);
        };

        match oracle.summarize(requirements).await {
            Ok(summary) => {
                info!(
                    "Oracle summarized requirements: role={}, {} essential skills",
                    summary.role,
                    summary.essential_skills.len()
                );
                summary
            }
            Err(e) => {
                warn!("Could not summarize requirements via oracle, using keyword extraction: {e}");
                KeywordFallback.summary_for(requirements)
            }
        }
    }
}

/// Trims entries, lower-cases essential skills into search keywords and drops
/// case-insensitive duplicates, keeping first occurrences.
fn normalize(summary: RequirementsSummary) -> RequirementsSummary {
    RequirementsSummary {
        essential_skills: dedupe(
            summary
                .essential_skills
                .iter()
                .map(|s| s.trim().to_lowercase()),
        ),
        tech_stack: dedupe(summary.tech_stack.iter().map(|s| s.trim().to_string())),
        expertise: dedupe(summary.expertise.iter().map(|s| s.trim().to_string())),
        role: match summary.role.trim() {
            "" => "Developer".to_string(),
            role => role.to_string(),
        },
    }
}

fn dedupe(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if item.is_empty() || out.iter().any(|o| o.eq_ignore_ascii_case(&item)) {
            continue;
        }
        out.push(item);
    }
    out
}
