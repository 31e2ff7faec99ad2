use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Application configuration loaded from environment variables.
///
/// Credentials are optional at startup. A missing `GITHUB_TOKEN` is reported to the
/// caller of every search endpoint as a configuration error; a missing
/// `OPENROUTER_API_KEY` leaves the requirements summarizer on its keyword fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_api_url: String,
    /// Minimum spacing between per-candidate enrichment calls.
    pub search_throttle: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let throttle_ms = std::env::var("SEARCH_THROTTLE_MS")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .context("SEARCH_THROTTLE_MS must be a number of milliseconds")?;

        Ok(Config {
            github_token: optional_env("GITHUB_TOKEN"),
            github_api_url: optional_env("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_api_url: optional_env("OPENROUTER_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_API_URL.to_string()),
            search_throttle: Duration::from_millis(throttle_ms),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Blank values count as unset so an empty `.env` line does not masquerade as a credential.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
