// Oracle prompts for the profile deep dive.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RECRUITER_PERSONA};

pub fn code_review_system() -> String {
    format!(
        "{RECRUITER_PERSONA} Review code quality and technical skills accurately. \
         {JSON_ONLY_INSTRUCTION}"
    )
}

/// Code review prompt template. Replace `{requirements}`, `{readme}` and `{files}` before sending.
pub const CODE_REVIEW_PROMPT_TEMPLATE: &str = r#"Analyze this GitHub repository for a job position with the following requirements:
{requirements}

Repository README:
{readme}

File structure:
{files}

Provide a detailed code quality analysis in JSON format:
{
  "overallScore": <number 0-100>,
  "codeStructure": "<assessment of code organization>",
  "documentation": "<assessment of documentation quality>",
  "testCoverage": "<assessment of testing practices>",
  "bestPractices": "<assessment of coding standards>"
}"#;
