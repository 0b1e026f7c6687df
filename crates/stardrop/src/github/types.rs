//! GitHub API data types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One raw entry from `GET /user/starred` when requested with the
/// `application/vnd.github.star+json` media type (the only representation
/// that includes the starred-at timestamp).
#[derive(Debug, Clone, Deserialize)]
pub struct StarredEntry {
    pub starred_at: DateTime<Utc>,
    pub repo: StarredRepo,
}

/// Repository fields consumed from the starred entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StarredRepo {
    pub html_url: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A starred repository, shaped for reconciliation and bookmark creation.
///
/// All defaulting happens at the collector boundary: a null description
/// becomes an empty string, missing topics become an empty list. Consumers
/// never see wire-level nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Repository page URL; joins against raindrop links after normalization.
    pub url: String,
    /// `owner/name`, used as the bookmark title.
    pub full_name: String,
    /// Repository description, empty when GitHub has none.
    pub description: String,
    /// Primary language, when GitHub reports one.
    pub language: Option<String>,
    /// Repository topics.
    pub topics: Vec<String>,
    /// When the authenticated user starred the repository.
    pub starred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starred_entry_deserializes_the_star_json_shape() {
        let json = r#"{
            "starred_at": "2023-06-01T12:00:00Z",
            "repo": {
                "html_url": "https://github.com/rust-lang/cargo",
                "full_name": "rust-lang/cargo",
                "description": "The Rust package manager",
                "language": "Rust",
                "topics": ["rust", "package-manager"]
            }
        }"#;

        let entry: StarredEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.repo.full_name, "rust-lang/cargo");
        assert_eq!(entry.repo.language.as_deref(), Some("Rust"));
        assert_eq!(entry.repo.topics.len(), 2);
        assert_eq!(entry.starred_at.timestamp(), 1_685_620_800);
    }

    #[test]
    fn starred_entry_tolerates_null_description_and_missing_topics() {
        let json = r#"{
            "starred_at": "2023-06-01T12:00:00Z",
            "repo": {
                "html_url": "https://github.com/example/repo",
                "full_name": "example/repo",
                "description": null,
                "language": null
            }
        }"#;

        let entry: StarredEntry = serde_json::from_str(json).unwrap();
        assert!(entry.repo.description.is_none());
        assert!(entry.repo.language.is_none());
        assert!(entry.repo.topics.is_empty());
    }
}
