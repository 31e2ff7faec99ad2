//! GitHub REST client: the only module that talks to the code-host API.
//!
//! Callers depend on the `CodeHost` trait, not on `GitHubClient`, so the search
//! pipeline can run against an in-memory host in tests.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod models;

#[cfg(test)]
pub mod fake;

use models::{
    rank_languages, CommitEntry, ContentEntry, EncodedFile, GitHubUser, Repository,
    RepositorySearchResponse, SearchRepository,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Could not decode {0}")]
    Decode(String),
}

/// The code-host operations the service needs.
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// `/search/repositories`, sorted by stars descending.
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<SearchRepository>, GitHubError>;

    async fn fetch_user(&self, login: &str) -> Result<GitHubUser, GitHubError>;

    async fn list_user_repos(&self, login: &str, per_page: u8)
        -> Result<Vec<Repository>, GitHubError>;

    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError>;

    /// Languages ranked by byte count, largest first.
    async fn repo_languages(&self, owner: &str, repo: &str)
        -> Result<Vec<(String, u64)>, GitHubError>;

    async fn repo_readme(&self, owner: &str, repo: &str) -> Result<String, GitHubError>;

    /// Root directory listing.
    async fn repo_contents(&self, owner: &str, repo: &str)
        -> Result<Vec<ContentEntry>, GitHubError>;

    async fn repo_file(&self, owner: &str, repo: &str, path: &str)
        -> Result<String, GitHubError>;

    async fn repo_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<CommitEntry>, GitHubError>;
}

/// Bearer-authenticated GitHub v3 client.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str, base_url: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("scout-talent-search"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        let auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("GITHUB_TOKEN contains characters not allowed in a header")?;
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build GitHub HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn get_file(&self, path: &str, what: &str) -> Result<String, GitHubError> {
        let file: EncodedFile = self.get_json(path).await?;
        file.decode()
            .ok_or_else(|| GitHubError::Decode(what.to_string()))
    }
}

/// `/repos/{owner}/{repo}` with both segments percent-encoded.
fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}

/// Encodes each segment of a repository-relative path, keeping the separators.
fn encode_file_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl CodeHost for GitHubClient {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<SearchRepository>, GitHubError> {
        let path = format!(
            "/search/repositories?q={}&sort=stars&order=desc&per_page={per_page}",
            urlencoding::encode(query)
        );
        let response: RepositorySearchResponse = self.get_json(&path).await?;
        debug!(
            "Repository search '{query}' matched {} repositories",
            response.total_count
        );
        Ok(response.items)
    }

    async fn fetch_user(&self, login: &str) -> Result<GitHubUser, GitHubError> {
        self.get_json(&format!("/users/{}", urlencoding::encode(login)))
            .await
    }

    async fn list_user_repos(
        &self,
        login: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, GitHubError> {
        self.get_json(&format!(
            "/users/{}/repos?sort=stars&per_page={per_page}",
            urlencoding::encode(login)
        ))
        .await
    }

    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        self.get_json(&repo_path(owner, repo)).await
    }

    async fn repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<(String, u64)>, GitHubError> {
        let raw: HashMap<String, u64> = self
            .get_json(&format!("{}/languages", repo_path(owner, repo)))
            .await?;
        Ok(rank_languages(raw))
    }

    async fn repo_readme(&self, owner: &str, repo: &str) -> Result<String, GitHubError> {
        self.get_file(&format!("{}/readme", repo_path(owner, repo)), "README")
            .await
    }

    async fn repo_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContentEntry>, GitHubError> {
        self.get_json(&format!("{}/contents", repo_path(owner, repo)))
            .await
    }

    async fn repo_file(&self, owner: &str, repo: &str, path: &str) -> Result<String, GitHubError> {
        self.get_file(
            &format!("{}/contents/{}", repo_path(owner, repo), encode_file_path(path)),
            path,
        )
            .await
    }

    async fn repo_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<CommitEntry>, GitHubError> {
        self.get_json(&format!(
            "{}/commits?per_page={per_page}",
            repo_path(owner, repo)
        ))
            .await
    }
}
