//! Repository search per keyword. A failed search yields no hits; it never aborts the run.

use tracing::{debug, warn};

use crate::github::models::SearchRepository;
use crate::github::CodeHost;

/// Results requested per keyword.
pub const RESULTS_PER_KEYWORD: u8 = 30;

/// Search query for one keyword: popular, recently pushed repositories written in it.
pub fn build_search_query(keyword: &str) -> String {
    format!("{keyword} language:{keyword} stars:>5 pushed:>2023-01-01")
}

pub async fn search_keyword(host: &dyn CodeHost, keyword: &str) -> Vec<SearchRepository> {
    let query = build_search_query(keyword);
    match host.search_repositories(&query, RESULTS_PER_KEYWORD).await {
        Ok(hits) => {
            debug!("Keyword '{keyword}' returned {} repositories", hits.len());
            hits
        }
        Err(e) => {
            warn!("Repository search failed for keyword '{keyword}', skipping: {e}");
            vec![]
        }
    }
}
