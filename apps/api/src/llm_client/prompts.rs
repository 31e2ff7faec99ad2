// Shared prompt fragments.
// Each service that needs oracle calls defines its own prompts.rs alongside it.

/// Appended to every system prompt that expects a JSON answer.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object. \
    Do NOT include explanations or apologies.";

/// Role preamble shared by all recruiter-facing prompts.
pub const RECRUITER_PERSONA: &str = "You are an expert technical recruiter and software engineer.";
