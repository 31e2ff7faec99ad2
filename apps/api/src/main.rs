mod analysis;
mod config;
mod errors;
mod extract;
mod github;
mod llm_client;
mod profile;
mod routes;
mod state;
mod talent;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github::{CodeHost, GitHubClient};
use crate::llm_client::{LlmClient, Oracle};
use crate::routes::build_router;
use crate::state::AppState;
use crate::talent::aggregator::ThrottlePolicy;
use crate::talent::decoration::OsEntropy;
use crate::talent::summarizer::{LlmRequirementsOracle, RequirementsOracle, RequirementsSummarizer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    // GitHub client (required per request, optional at startup)
    let code_host: Option<Arc<dyn CodeHost>> = match &config.github_token {
        Some(token) => {
            let client = GitHubClient::new(token, &config.github_api_url)?;
            info!("GitHub client initialized ({})", config.github_api_url);
            Some(Arc::new(client))
        }
        None => {
            warn!("GITHUB_TOKEN not set; search and analysis endpoints will return a configuration error");
            None
        }
    };

    // Oracle client
    let oracle: Option<Arc<dyn Oracle>> = match &config.openrouter_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.openrouter_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm))
        }
        None => {
            warn!("OPENROUTER_API_KEY not set; using deterministic fallbacks only");
            None
        }
    };

    let summarizer = match &oracle {
        Some(o) => {
            let live: Arc<dyn RequirementsOracle> = Arc::new(LlmRequirementsOracle::new(o.clone()));
            RequirementsSummarizer::new(Some(live))
        }
        None => RequirementsSummarizer::fallback_only(),
    };

    let throttle = ThrottlePolicy::new(config.search_throttle);
    info!("Search throttle: {:?} between candidates", config.search_throttle);

    let state = AppState {
        code_host,
        oracle,
        summarizer,
        throttle,
        entropy: Arc::new(OsEntropy),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
