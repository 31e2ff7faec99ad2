// Oracle prompts for single-repository analysis.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RECRUITER_PERSONA};

pub fn analysis_system() -> String {
    format!(
        "{RECRUITER_PERSONA} Provide detailed, accurate assessments of candidates based on \
         their GitHub repositories. {JSON_ONLY_INSTRUCTION}"
    )
}

/// Repository analysis prompt template. Replace every `{placeholder}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following GitHub repository against the job requirements and provide a detailed assessment.

REPOSITORY DATA:
- Name: {name}
- Description: {description}
- Primary Language: {language}
- Languages Used: {languages}
- Topics/Tags: {topics}
- Stars: {stars}
- Forks: {forks}
- README Preview: {readme}...
- Recent Commits: {commits}
- Key Files: {files}

MANIFEST EXCERPTS:
{manifests}

JOB REQUIREMENTS:
{requirements}

Provide the assessment in the following JSON format:
{
  "matchScore": <number between 0-100>,
  "strengths": [<candidate strengths shown by the repository>],
  "gaps": [<required skills not evident in the repository>],
  "recommendations": [<suggestions for improvement>],
  "summary": "<brief overall assessment>",
  "technicalSkills": [<technical skills demonstrated>],
  "projectComplexity": "<Beginner|Intermediate|Advanced>"
}

Focus on technical alignment with the requirements, project complexity and architecture,
code quality signals from commits and structure, and experience relevant to the role.
If the repository does not demonstrate the core technologies named in the JOB REQUIREMENTS,
matchScore must be below 20 and the missing skills must appear in "gaps" and "summary"."#;
