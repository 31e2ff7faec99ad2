//! Talent search pipeline.
//!
//! Flow: summarize requirements → keyword set → per-keyword repository search →
//!       owner enrichment + scoring → admitted candidates, best first.
//!
//! Deterministic given its collaborators; cosmetic fields are added by the caller.

use tracing::info;

use crate::github::CodeHost;
use crate::talent::aggregator::{CandidateAggregator, ThrottlePolicy};
use crate::talent::models::{Candidate, RequirementsSummary};
use crate::talent::summarizer::RequirementsSummarizer;

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub summary: RequirementsSummary,
    pub candidates: Vec<Candidate>,
}

pub async fn match_developers(
    host: &dyn CodeHost,
    summarizer: &RequirementsSummarizer,
    throttle: ThrottlePolicy,
    requirements: &str,
) -> MatchOutcome {
    let summary = summarizer.summarize(requirements).await;
    info!("Searching with keywords {:?}", summary.essential_skills);

    let candidates = CandidateAggregator::new(host, throttle)
        .aggregate(&summary.essential_skills)
        .await;

    MatchOutcome {
        summary,
        candidates,
    }
}
