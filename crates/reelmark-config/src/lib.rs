#![deny(unsafe_code)]

//! Configuration loading and validation for Reelmark.
//!
//! Loads TOML configuration files and validates them against expected
//! schemas. Provides the [`AppConfig`] type as the central configuration
//! structure, the [`groups`] module for tag groups and their flat text
//! codec, and the [`record`] module for the synchronized key-value form
//! used by hosted options surfaces.

/// Tag groups and the flat text codec.
pub mod groups;
/// Synchronized key-value settings record (JSON interchange).
pub mod record;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use groups::{GroupId, TagGroup, TagGroupList, decode_groups, encode_groups};
pub use record::SettingsRecord;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cataloging service endpoint configuration.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tag groups offered in the import menu, in display order.
    #[serde(default)]
    pub groups: Vec<TagGroupConfig>,
}

/// Configuration for the external cataloging service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// URL of the import endpoint.
    #[serde(default = "default_service_url")]
    pub url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
        }
    }
}

pub(crate) fn default_service_url() -> String {
    "http://localhost:4000/".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A single tag group as expressed in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagGroupConfig {
    /// Label shown in the context menu.
    pub label: String,

    /// Tags submitted when this group is chosen, in order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.url.is_empty() {
            return Err(ConfigError::Validation(
                "service.url must not be empty".to_string(),
            ));
        }
        if let Err(e) = url::Url::parse(&self.service.url) {
            return Err(ConfigError::Validation(format!(
                "service.url is not a valid URL: {e}"
            )));
        }
        Ok(())
    }

    /// Build the normalized tag-group list from the `[[groups]]` entries.
    ///
    /// Groups with no tags are dropped, matching the flat-codec invariant;
    /// every surviving group gets a fresh [`GroupId`].
    pub fn tag_groups(&self) -> TagGroupList {
        self.groups
            .iter()
            .filter(|g| !g.tags.is_empty())
            .map(|g| TagGroup::new(g.label.clone(), g.tags.clone()))
            .collect()
    }

    /// Replace the `[[groups]]` entries from a normalized group list.
    pub fn set_tag_groups(&mut self, groups: &[TagGroup]) {
        self.groups = groups
            .iter()
            .map(|g| TagGroupConfig {
                label: g.label.clone(),
                tags: g.tags.clone(),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service.url, "http://localhost:4000/");
        assert_eq!(config.logging.level, "info");
        assert!(config.groups.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.service.url, "http://localhost:4000/");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [service]
            url = "https://videos.example.com/"

            [logging]
            level = "debug"

            [[groups]]
            label = "music"
            tags = ["music", "audio"]

            [[groups]]
            label = "talks"
            tags = ["conference"]
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.service.url, "https://videos.example.com/");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[0].label, "music");
        assert_eq!(config.groups[1].tags, vec!["conference"]);
    }

    #[test]
    fn test_validation_rejects_empty_url() {
        let toml = r#"
            [service]
            url = ""
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_validation_rejects_relative_url() {
        let toml = r#"
            [service]
            url = "not a url"
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_tag_groups_drop_empty_entries() {
        let toml = r#"
            [[groups]]
            label = "empty"

            [[groups]]
            label = "kept"
            tags = ["tag"]
        "#;
        let config = AppConfig::parse(toml).unwrap();
        let groups = config.tag_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "kept");
    }

    #[test]
    fn test_tag_groups_preserve_order() {
        let toml = r#"
            [[groups]]
            label = "first"
            tags = ["a"]

            [[groups]]
            label = "second"
            tags = ["b"]
        "#;
        let groups = AppConfig::parse(toml).unwrap().tag_groups();
        assert_eq!(groups[0].label, "first");
        assert_eq!(groups[1].label, "second");
        assert_ne!(groups[0].id, groups[1].id);
    }

    #[test]
    fn test_set_tag_groups_round_trip() {
        let mut config = AppConfig::default();
        let groups = decode_groups("music,music,audio\ntalks,conference");
        config.set_tag_groups(&groups);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.tag_groups()[1].tags, vec!["conference"]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reelmark.toml");
        tokio::fs::write(&path, b"[service]\nurl = \"http://catalog:4000/\"\n")
            .await
            .unwrap();

        let config = AppConfig::load(&path).await.unwrap();
        assert_eq!(config.service.url, "http://catalog:4000/");
    }

    #[tokio::test]
    async fn test_load_nonexistent_file() {
        let result = AppConfig::load(Path::new("/nonexistent/file.toml")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, b"not valid toml [[[").await.unwrap();

        assert!(AppConfig::load(&path).await.is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");
    }
}
