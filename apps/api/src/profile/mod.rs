// Profile deep dive: one developer's best-matching repository, code review,
// skills and project summaries.

pub mod analyzer;
pub mod assessment;
pub mod code_review;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod repo_matcher;
