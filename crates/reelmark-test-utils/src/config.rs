//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values
//! without repeating boilerplate across crate boundaries.

use reelmark_config::{AppConfig, TagGroupConfig};

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .service_url("http://127.0.0.1:4000/")
///     .group("music", &["music", "audio"])
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn service_url(mut self, url: &str) -> Self {
        self.config.service.url = url.to_string();
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn group(mut self, label: &str, tags: &[&str]) -> Self {
        self.config.groups.push(TagGroupConfig {
            label: label.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
