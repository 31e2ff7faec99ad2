use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account from `/users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// "User" or "Organization".
    #[serde(rename = "type")]
    pub account_type: String,
}

impl GitHubUser {
    pub fn is_organization(&self) -> bool {
        self.account_type.eq_ignore_ascii_case("Organization")
    }

    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// A repository as returned by user listings, repository search and `/repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

/// One item of `/search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRepository {
    #[serde(flatten)]
    pub repository: Repository,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Deserialize)]
pub struct RepositorySearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<SearchRepository>,
}

/// An entry of a repository directory listing (`/contents`).
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

/// A base64-encoded file body (`/readme`, `/contents/{path}`).
#[derive(Debug, Deserialize)]
pub struct EncodedFile {
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

impl EncodedFile {
    /// Decodes the body. GitHub wraps base64 at 60 columns, so whitespace is stripped first.
    pub fn decode(&self) -> Option<String> {
        if !self.encoding.is_empty() && self.encoding != "base64" {
            return Some(self.content.clone());
        }
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let bytes = STANDARD.decode(compact).ok()?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub date: Option<String>,
}

/// Byte counts per language from `/languages`, largest first.
pub fn rank_languages(raw: HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut languages: Vec<(String, u64)> = raw.into_iter().collect();
    languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_organization_type() {
        let json = r#"{
            "login": "acme",
            "id": 7,
            "avatar_url": "https://avatars.example/7",
            "html_url": "https://github.com/acme",
            "name": null,
            "bio": null,
            "location": null,
            "email": null,
            "public_repos": 40,
            "followers": 900,
            "following": 0,
            "type": "Organization"
        }"#;
        let user: GitHubUser = serde_json::from_str(json).unwrap();
        assert!(user.is_organization());
        assert_eq!(user.display_name(), "acme");
    }

    #[test]
    fn test_search_item_flattens_repository() {
        let json = r#"{
            "name": "tool",
            "description": "a tool",
            "language": "Go",
            "topics": ["cli"],
            "stargazers_count": 42,
            "forks_count": 3,
            "updated_at": "2024-03-01T10:00:00Z",
            "html_url": "https://github.com/jane/tool",
            "owner": {"login": "jane", "type": "User"}
        }"#;
        let item: SearchRepository = serde_json::from_str(json).unwrap();
        assert_eq!(item.owner.login, "jane");
        assert_eq!(item.repository.stargazers_count, 42);
        assert_eq!(item.repository.topics, vec!["cli".to_string()]);
    }

    #[test]
    fn test_encoded_file_decodes_wrapped_base64() {
        let file = EncodedFile {
            content: "IyBIZWxs\nbyB3b3Js\nZA==\n".to_string(),
            encoding: "base64".to_string(),
        };
        assert_eq!(file.decode().as_deref(), Some("# Hello world"));
    }

    #[test]
    fn test_rank_languages_largest_first() {
        let raw = HashMap::from([
            ("Shell".to_string(), 10),
            ("Rust".to_string(), 5000),
            ("Python".to_string(), 300),
        ]);
        let ranked: Vec<String> = rank_languages(raw).into_iter().map(|(l, _)| l).collect();
        assert_eq!(ranked, vec!["Rust", "Python", "Shell"]);
    }
}
