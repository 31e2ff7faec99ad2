//! Deterministic summaries of a developer's repository list.

use std::collections::HashSet;

use crate::github::models::{GitHubUser, Repository};
use crate::profile::models::{Complexity, NotableProject, ProjectSummary, SkillsAssessment};

const MAX_TECHNICAL_SKILLS: usize = 10;
const MAX_SPECIALIZATIONS: usize = 5;
const MAX_NOTABLE_PROJECTS: usize = 5;
const NOTABLE_STAR_FLOOR: u32 = 5;

pub fn assess_skills(repos: &[Repository], user: &GitHubUser) -> SkillsAssessment {
    // One entry per repository that declares a language; duplicates are kept for the count.
    let languages: Vec<&str> = repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
        .collect();
    let topics = repos.iter().flat_map(|r| r.topics.iter().map(String::as_str));
    let total_stars: u32 = repos.iter().map(|r| r.stargazers_count).sum();

    SkillsAssessment {
        technical_skills: unique(languages.iter().copied().chain(topics), MAX_TECHNICAL_SKILLS),
        project_complexity: complexity(total_stars, languages.len()),
        experience_level: format!(
            "{} public repositories with {total_stars} total stars",
            user.public_repos
        ),
        specializations: unique(languages.iter().copied(), MAX_SPECIALIZATIONS),
    }
}

fn complexity(total_stars: u32, language_count: usize) -> Complexity {
    if total_stars > 100 || language_count > 5 {
        Complexity::Advanced
    } else if total_stars > 20 || language_count > 3 {
        Complexity::Intermediate
    } else {
        Complexity::Beginner
    }
}

/// Repositories with more than a handful of stars or any description, first five.
pub fn summarize_projects(repos: &[Repository]) -> ProjectSummary {
    let notable_projects = repos
        .iter()
        .filter(|r| {
            r.stargazers_count > NOTABLE_STAR_FLOOR
                || r.description.as_deref().is_some_and(|d| !d.is_empty())
        })
        .take(MAX_NOTABLE_PROJECTS)
        .map(|r| NotableProject {
            name: r.name.clone(),
            description: r
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description available".to_string()),
            impact: format!("{} stars, {} forks", r.stargazers_count, r.forks_count),
            technologies: r
                .language
                .iter()
                .filter(|l| !l.is_empty())
                .chain(r.topics.iter())
                .cloned()
                .collect(),
        })
        .collect();

    ProjectSummary {
        total_projects: repos.len(),
        notable_projects,
    }
}

fn unique<'a>(items: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{date, repo, user, with_topics};

    fn described(mut repository: Repository, description: &str) -> Repository {
        repository.description = Some(description.to_string());
        repository
    }

    #[test]
    fn test_skills_put_languages_before_topics() {
        let repos = vec![
            with_topics(repo("api", Some("Go"), 10, date(2024, 1, 1)), &["grpc", "go"]),
            with_topics(repo("ui", Some("TypeScript"), 4, date(2024, 1, 1)), &["react"]),
            repo("cli", Some("Go"), 2, date(2024, 1, 1)),
        ];
        let assessment = assess_skills(&repos, &user("ada", 1));

        assert_eq!(
            assessment.technical_skills,
            vec!["Go", "TypeScript", "grpc", "go", "react"]
        );
        assert_eq!(assessment.specializations, vec!["Go", "TypeScript"]);
        assert_eq!(
            assessment.experience_level,
            "12 public repositories with 16 total stars"
        );
        assert_eq!(assessment.project_complexity, Complexity::Beginner);
    }

    #[test]
    fn test_complexity_bands() {
        assert_eq!(complexity(101, 0), Complexity::Advanced);
        assert_eq!(complexity(0, 6), Complexity::Advanced);
        assert_eq!(complexity(100, 5), Complexity::Intermediate);
        assert_eq!(complexity(21, 0), Complexity::Intermediate);
        assert_eq!(complexity(0, 4), Complexity::Intermediate);
        assert_eq!(complexity(20, 3), Complexity::Beginner);
    }

    #[test]
    fn test_language_count_includes_repeats() {
        // Four Rust repositories count as four languages.
        let repos: Vec<Repository> = (0..4)
            .map(|i| repo(&format!("crate-{i}"), Some("Rust"), 1, date(2024, 1, 1)))
            .collect();
        let assessment = assess_skills(&repos, &user("ferris", 2));
        assert_eq!(assessment.project_complexity, Complexity::Intermediate);
        assert_eq!(assessment.specializations, vec!["Rust"]);
    }

    #[test]
    fn test_skill_lists_are_capped() {
        let languages = [
            "Rust", "Go", "C", "Zig", "Python", "Ruby", "Java", "Kotlin", "Swift", "Elixir", "Haskell",
        ];
        let repos: Vec<Repository> = languages
            .iter()
            .map(|l| repo(l, Some(*l), 0, date(2024, 1, 1)))
            .collect();
        let assessment = assess_skills(&repos, &user("poly", 3));
        assert_eq!(assessment.technical_skills.len(), 10);
        assert_eq!(assessment.specializations, vec!["Rust", "Go", "C", "Zig", "Python"]);
    }

    #[test]
    fn test_notable_projects_need_stars_or_description() {
        let repos = vec![
            repo("scratch", None, 1, date(2024, 1, 1)),
            described(repo("notes", None, 0, date(2024, 1, 1)), "Personal notes"),
            with_topics(repo("engine", Some("Rust"), 42, date(2024, 1, 1)), &["gamedev"]),
        ];
        let summary = summarize_projects(&repos);

        assert_eq!(summary.total_projects, 3);
        assert_eq!(summary.notable_projects.len(), 2);

        let notes = &summary.notable_projects[0];
        assert_eq!(notes.name, "notes");
        assert!(notes.technologies.is_empty());

        let engine = &summary.notable_projects[1];
        assert_eq!(engine.description, "No description available");
        assert_eq!(engine.impact, "42 stars, 0 forks");
        assert_eq!(engine.technologies, vec!["Rust", "gamedev"]);
    }

    #[test]
    fn test_notable_projects_take_first_five() {
        let repos: Vec<Repository> = (0..8)
            .map(|i| repo(&format!("lib-{i}"), Some("Go"), 50, date(2024, 1, 1)))
            .collect();
        let names: Vec<String> = summarize_projects(&repos)
            .notable_projects
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["lib-0", "lib-1", "lib-2", "lib-3", "lib-4"]);
    }
}
