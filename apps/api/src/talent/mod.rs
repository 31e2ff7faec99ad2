// Talent search: requirements → keywords → GitHub discovery → scored, ranked candidates.
// All oracle calls go through llm_client and all GitHub calls through github::CodeHost.

pub mod aggregator;
pub mod decoration;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
pub mod search;
pub mod summarizer;
