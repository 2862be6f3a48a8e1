//! Synchronized key-value settings record.
//!
//! Hosted options surfaces persist settings as a single synchronized JSON
//! record with optional `url` and `tagGroups` fields. Missing fields are not
//! an error; they fall back to defaults when the record is resolved into an
//! [`AppConfig`].

use serde::{Deserialize, Serialize};

use crate::{AppConfig, ConfigError, TagGroupConfig, default_service_url};

/// The raw synchronized settings blob.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// Service URL, if the user has configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Tag groups, if any have been configured.
    #[serde(default)]
    pub tag_groups: Vec<TagGroupConfig>,
}

impl SettingsRecord {
    /// Parse a record from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the record to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Resolve the record into a full configuration, substituting defaults
    /// for absent fields. Absent configuration is never an error; an invalid
    /// stored URL is.
    pub fn resolve(self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();
        config.service.url = self.url.unwrap_or_else(default_service_url);
        config.groups = self.tag_groups;
        config.validate()?;
        Ok(config)
    }
}

impl From<&AppConfig> for SettingsRecord {
    fn from(config: &AppConfig) -> Self {
        Self {
            url: Some(config.service.url.clone()),
            tag_groups: config.groups.clone(),
        }
    }
}
