use std::sync::Arc;

use crate::errors::AppError;
use crate::github::CodeHost;
use crate::llm_client::Oracle;
use crate::talent::aggregator::ThrottlePolicy;
use crate::talent::decoration::Entropy;
use crate::talent::summarizer::RequirementsSummarizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no GitHub token is configured; every search endpoint then fails fast.
    pub code_host: Option<Arc<dyn CodeHost>>,
    /// `None` when no oracle key is configured; callers use their deterministic fallbacks.
    pub oracle: Option<Arc<dyn Oracle>>,
    pub summarizer: RequirementsSummarizer,
    pub throttle: ThrottlePolicy,
    /// Randomness for cosmetic response fields only.
    pub entropy: Arc<dyn Entropy>,
}

impl AppState {
    pub fn code_host(&self) -> Result<Arc<dyn CodeHost>, AppError> {
        self.code_host
            .clone()
            .ok_or_else(|| AppError::Configuration("GitHub token not configured".to_string()))
    }
}
