//! Environment configuration for the stardrop CLI.
//!
//! All three settings are required and read from the environment (a `.env`
//! file is honored via dotenvy before loading):
//!
//! - `GH_TOKEN`              - GitHub personal access token
//! - `RAINDROP_TOKEN`        - Raindrop.io API token
//! - `RAINDROP_COLLECTION_ID` - numeric id of the target collection
//!
//! Missing or malformed values fail the run before any network activity.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use thiserror::Error;

/// Raw values as read from the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    gh_token: Option<String>,
    raindrop_token: Option<String>,
    raindrop_collection_id: Option<String>,
}

/// Validated settings for one sync run.
#[derive(Debug, Clone)]
pub struct Config {
    pub gh_token: String,
    pub raindrop_token: String,
    pub collection_id: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid RAINDROP_COLLECTION_ID: {0}")]
    InvalidCollectionId(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl Config {
    /// Load and validate configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let raw: RawConfig = ConfigBuilder::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let gh_token = non_empty(raw.gh_token).ok_or(ConfigError::Missing("GH_TOKEN"))?;
        let raindrop_token =
            non_empty(raw.raindrop_token).ok_or(ConfigError::Missing("RAINDROP_TOKEN"))?;
        let collection_raw = non_empty(raw.raindrop_collection_id)
            .ok_or(ConfigError::Missing("RAINDROP_COLLECTION_ID"))?;

        let collection_id = collection_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidCollectionId(collection_raw.clone()))?;

        Ok(Self {
            gh_token,
            raindrop_token,
            collection_id,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(gh: Option<&str>, rd: Option<&str>, id: Option<&str>) -> RawConfig {
        RawConfig {
            gh_token: gh.map(String::from),
            raindrop_token: rd.map(String::from),
            raindrop_collection_id: id.map(String::from),
        }
    }

    #[test]
    fn valid_settings_parse() {
        let config = Config::from_raw(raw(Some("gh"), Some("rd"), Some("42"))).unwrap();
        assert_eq!(config.gh_token, "gh");
        assert_eq!(config.raindrop_token, "rd");
        assert_eq!(config.collection_id, 42);
    }

    #[test]
    fn each_missing_setting_is_named_in_the_error() {
        let err = Config::from_raw(raw(None, Some("rd"), Some("1"))).unwrap_err();
        assert!(err.to_string().contains("GH_TOKEN"));

        let err = Config::from_raw(raw(Some("gh"), None, Some("1"))).unwrap_err();
        assert!(err.to_string().contains("RAINDROP_TOKEN"));

        let err = Config::from_raw(raw(Some("gh"), Some("rd"), None)).unwrap_err();
        assert!(err.to_string().contains("RAINDROP_COLLECTION_ID"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err = Config::from_raw(raw(Some("  "), Some("rd"), Some("1"))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GH_TOKEN")));
    }

    #[test]
    fn non_numeric_collection_id_is_rejected() {
        let err = Config::from_raw(raw(Some("gh"), Some("rd"), Some("not-a-number"))).unwrap_err();
        assert!(err.to_string().contains("not-a-number"));

        let err = Config::from_raw(raw(Some("gh"), Some("rd"), Some("1.5"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCollectionId(_)));
    }
}
