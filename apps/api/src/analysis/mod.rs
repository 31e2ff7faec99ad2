// Single-repository analysis: fetch a repository snapshot and assess it against
// job requirements, via the oracle when it answers usefully.

pub mod evaluator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod snapshot;
