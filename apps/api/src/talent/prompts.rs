// Oracle prompts for the talent search pipeline.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// System prompt for requirements summarization.
pub fn requirements_system() -> String {
    format!(
        "You are an expert technical recruiter assistant. Your task is to extract key \
         information from job requirements. {JSON_ONLY_INSTRUCTION}"
    )
}

/// Requirements summarization prompt template. Replace `{requirements}` before sending.
pub const REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"Analyze the following job requirements and extract the key information in a structured JSON format.

Job Requirements:
"{requirements}"

Extract the following information:
- essentialSkills: An array of the most important technical skills, languages, and frameworks.
- techStack: A broader array of all mentioned technologies.
- expertise: An array of expertise areas (e.g., "Frontend", "Backend", "DevOps", "AI/ML").
- role: The job role (e.g., "Senior Software Engineer", "Data Scientist").

Respond with only the JSON object:
{
  "essentialSkills": ["go", "kubernetes"],
  "techStack": ["go", "kubernetes", "aws"],
  "expertise": ["Backend", "DevOps"],
  "role": "Senior Backend Engineer"
}"#;
