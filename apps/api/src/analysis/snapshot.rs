//! Gathers a `RepositorySnapshot` from the code host.
//!
//! Repository metadata is required; languages, README, commits and key files are
//! best-effort and default to empty.

use tracing::{debug, warn};

use crate::analysis::models::{CommitSummary, KeyFile, RepoCoordinates, RepositorySnapshot};
use crate::errors::AppError;
use crate::github::CodeHost;

const COMMITS_FETCHED: u8 = 10;
const COMMITS_KEPT: usize = 5;

/// Root manifests worth reading, with the ecosystem each implies.
pub const KEY_FILES: [(&str, &str); 6] = [
    ("package.json", "JavaScript/Node.js"),
    ("requirements.txt", "Python"),
    ("Cargo.toml", "Rust"),
    ("go.mod", "Go"),
    ("pom.xml", "Java"),
    ("Gemfile", "Ruby"),
];

/// Extracts owner and repository from any URL containing `github.com/{owner}/{repo}`.
/// A trailing `.git` and any query or fragment are dropped.
pub fn parse_github_url(url: &str) -> Result<RepoCoordinates, AppError> {
    let invalid = || AppError::Validation("Invalid GitHub URL format".to_string());

    let (_, path) = url.split_once("github.com/").ok_or_else(invalid)?;
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/');

    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(invalid());
    }

    Ok(RepoCoordinates {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

pub async fn fetch_snapshot(
    host: &dyn CodeHost,
    coordinates: &RepoCoordinates,
) -> Result<RepositorySnapshot, AppError> {
    let RepoCoordinates { owner, repo } = coordinates;

    let metadata = host
        .fetch_repo(owner, repo)
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to fetch GitHub data: {e}")))?;

    let languages = host.repo_languages(owner, repo).await.unwrap_or_else(|e| {
        warn!("No language breakdown for {owner}/{repo}: {e}");
        vec![]
    });
    let readme = host.repo_readme(owner, repo).await.unwrap_or_else(|e| {
        debug!("No README for {owner}/{repo}: {e}");
        String::new()
    });
    let commits = host
        .repo_commits(owner, repo, COMMITS_FETCHED)
        .await
        .unwrap_or_else(|e| {
            warn!("No commit history for {owner}/{repo}: {e}");
            vec![]
        })
        .into_iter()
        .take(COMMITS_KEPT)
        .map(|entry| CommitSummary {
            message: entry.commit.message,
            date: entry
                .commit
                .author
                .and_then(|a| a.date)
                .unwrap_or_default(),
        })
        .collect();

    let mut files = vec![];
    for (name, ecosystem) in KEY_FILES {
        match host.repo_file(owner, repo, name).await {
            Ok(content) => files.push(KeyFile {
                name: name.to_string(),
                content,
                ecosystem,
            }),
            Err(e) => debug!("{owner}/{repo} has no {name}: {e}"),
        }
    }

    Ok(RepositorySnapshot {
        name: metadata.name,
        description: metadata.description.unwrap_or_default(),
        language: metadata.language.unwrap_or_default(),
        languages,
        topics: metadata.topics,
        stars: metadata.stargazers_count,
        forks: metadata.forks_count,
        readme,
        files,
        commits,
    })
}
