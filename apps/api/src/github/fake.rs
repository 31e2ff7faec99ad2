//! In-memory `CodeHost` for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use super::models::{
    rank_languages, CommitAuthor, CommitDetail, CommitEntry, ContentEntry, GitHubUser, Repository,
    RepositoryOwner, SearchRepository,
};
use super::{CodeHost, GitHubError};

#[derive(Default)]
pub struct FakeCodeHost {
    searches: HashMap<String, Vec<SearchRepository>>,
    failing_searches: HashSet<String>,
    users: HashMap<String, GitHubUser>,
    /// Remaining transient profile failures per login.
    flaky_users: Mutex<HashMap<String, usize>>,
    user_repos: HashMap<String, Vec<Repository>>,
    repos: HashMap<String, Repository>,
    languages: HashMap<String, Vec<(String, u64)>>,
    readmes: HashMap<String, String>,
    contents: HashMap<String, Vec<ContentEntry>>,
    files: HashMap<String, String>,
    commits: HashMap<String, Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCodeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, hits: Vec<SearchRepository>) -> Self {
        self.searches.insert(query.to_string(), hits);
        self
    }

    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_string());
        self
    }

    pub fn with_user(mut self, user: GitHubUser, repos: Vec<Repository>) -> Self {
        self.user_repos.insert(user.login.clone(), repos);
        self.users.insert(user.login.clone(), user);
        self
    }

    /// The first `failures` profile fetches for `login` answer 502.
    pub fn with_flaky_user(self, login: &str, failures: usize) -> Self {
        self.flaky_users
            .lock()
            .unwrap()
            .insert(login.to_string(), failures);
        self
    }

    /// A profile whose repository listing fails.
    pub fn with_user_without_repos(mut self, user: GitHubUser) -> Self {
        self.users.insert(user.login.clone(), user);
        self
    }

    pub fn with_repo(mut self, owner: &str, repo: Repository) -> Self {
        self.repos.insert(format!("{owner}/{}", repo.name), repo);
        self
    }

    pub fn with_languages(mut self, full_name: &str, languages: &[(&str, u64)]) -> Self {
        self.languages.insert(
            full_name.to_string(),
            rank_languages(languages.iter().map(|(l, b)| (l.to_string(), *b)).collect()),
        );
        self
    }

    pub fn with_readme(mut self, full_name: &str, readme: &str) -> Self {
        self.readmes.insert(full_name.to_string(), readme.to_string());
        self
    }

    /// Names without an extension are listed as directories.
    pub fn with_contents(mut self, full_name: &str, names: &[&str]) -> Self {
        self.contents.insert(
            full_name.to_string(),
            names
                .iter()
                .map(|n| ContentEntry {
                    name: n.to_string(),
                    entry_type: if n.contains('.') { "file" } else { "dir" }.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str, body: &str) -> Self {
        self.files
            .insert(format!("{full_name}/{path}"), body.to_string());
        self
    }

    pub fn with_commits(mut self, full_name: &str, messages: &[&str]) -> Self {
        self.commits.insert(
            full_name.to_string(),
            messages.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    /// Every call made so far, e.g. `"user:jane"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(what: &str) -> GitHubError {
    GitHubError::Status {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl CodeHost for FakeCodeHost {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<SearchRepository>, GitHubError> {
        self.record(format!("search:{query}"));
        if self.failing_searches.contains(query) {
            return Err(GitHubError::Status {
                status: 422,
                message: "Validation Failed".to_string(),
            });
        }
        let mut hits = self.searches.get(query).cloned().unwrap_or_default();
        hits.truncate(per_page as usize);
        Ok(hits)
    }

    async fn fetch_user(&self, login: &str) -> Result<GitHubUser, GitHubError> {
        self.record(format!("user:{login}"));
        if let Some(remaining) = self.flaky_users.lock().unwrap().get_mut(login) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(GitHubError::Status {
                    status: 502,
                    message: "Bad Gateway".to_string(),
                });
            }
        }
        self.users.get(login).cloned().ok_or_else(|| not_found(login))
    }

    async fn list_user_repos(
        &self,
        login: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, GitHubError> {
        self.record(format!("repos:{login}"));
        let mut repos = self
            .user_repos
            .get(login)
            .cloned()
            .ok_or_else(|| not_found(login))?;
        repos.truncate(per_page as usize);
        Ok(repos)
    }

    async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        let key = format!("{owner}/{repo}");
        self.record(format!("repo:{key}"));
        self.repos.get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    async fn repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<(String, u64)>, GitHubError> {
        let key = format!("{owner}/{repo}");
        self.languages.get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    async fn repo_readme(&self, owner: &str, repo: &str) -> Result<String, GitHubError> {
        let key = format!("{owner}/{repo}");
        self.readmes.get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    async fn repo_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContentEntry>, GitHubError> {
        let key = format!("{owner}/{repo}");
        self.contents.get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    async fn repo_file(&self, owner: &str, repo: &str, path: &str) -> Result<String, GitHubError> {
        let key = format!("{owner}/{repo}/{path}");
        self.files.get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    async fn repo_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<CommitEntry>, GitHubError> {
        let key = format!("{owner}/{repo}");
        let messages = self.commits.get(&key).ok_or_else(|| not_found(&key))?;
        Ok(messages
            .iter()
            .take(per_page as usize)
            .map(|m| CommitEntry {
                commit: CommitDetail {
                    message: m.clone(),
                    author: Some(CommitAuthor {
                        date: Some("2024-05-01T12:00:00Z".to_string()),
                    }),
                },
            })
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixture builders
// ────────────────────────────────────────────────────────────────────────────

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn user(login: &str, id: u64) -> GitHubUser {
    GitHubUser {
        login: login.to_string(),
        id,
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
        html_url: format!("https://github.com/{login}"),
        name: None,
        bio: None,
        location: None,
        email: None,
        public_repos: 12,
        followers: 0,
        following: 3,
        account_type: "User".to_string(),
    }
}

pub fn organization(login: &str, id: u64) -> GitHubUser {
    GitHubUser {
        account_type: "Organization".to_string(),
        ..user(login, id)
    }
}

pub fn repo(name: &str, language: Option<&str>, stars: u32, updated: DateTime<Utc>) -> Repository {
    Repository {
        name: name.to_string(),
        description: None,
        language: language.map(str::to_string),
        topics: vec![],
        stargazers_count: stars,
        forks_count: 0,
        updated_at: updated,
        html_url: format!("https://github.com/someone/{name}"),
    }
}

pub fn with_topics(mut repository: Repository, topics: &[&str]) -> Repository {
    repository.topics = topics.iter().map(|t| t.to_string()).collect();
    repository
}

pub fn search_hit(owner: &str, repository: Repository) -> SearchRepository {
    SearchRepository {
        repository,
        owner: RepositoryOwner {
            login: owner.to_string(),
            account_type: "User".to_string(),
        },
    }
}
