//! Conversion from GitHub wire types to sync-engine types.

use super::types::{Star, StarredEntry};

/// Convert a raw starred entry into a [`Star`], applying defaulting rules
/// once at the boundary.
pub fn to_star(entry: &StarredEntry) -> Star {
    Star {
        url: entry.repo.html_url.clone(),
        full_name: entry.repo.full_name.clone(),
        description: entry.repo.description.clone().unwrap_or_default(),
        language: entry.repo.language.clone(),
        topics: entry.repo.topics.clone(),
        starred_at: entry.starred_at,
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::StarredRepo;
    use super::*;
    use chrono::Utc;

    fn entry(description: Option<&str>) -> StarredEntry {
        StarredEntry {
            starred_at: Utc::now(),
            repo: StarredRepo {
                html_url: "https://github.com/example/repo".to_string(),
                full_name: "example/repo".to_string(),
                description: description.map(String::from),
                language: Some("Rust".to_string()),
                topics: vec!["cli".to_string()],
            },
        }
    }

    #[test]
    fn maps_all_fields() {
        let star = to_star(&entry(Some("a tool")));
        assert_eq!(star.url, "https://github.com/example/repo");
        assert_eq!(star.full_name, "example/repo");
        assert_eq!(star.description, "a tool");
        assert_eq!(star.language.as_deref(), Some("Rust"));
        assert_eq!(star.topics, vec!["cli".to_string()]);
    }

    #[test]
    fn null_description_becomes_empty_string() {
        let star = to_star(&entry(None));
        assert_eq!(star.description, "");
    }
}
