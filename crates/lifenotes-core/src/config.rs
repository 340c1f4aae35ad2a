//! Site configuration
//!
//! Every field has a default, so a config file only lists what it changes:
//!
//! ```toml
//! content_root = "https://notes.example.org/"
//! discover_sample = 4
//! pattern_expansion = "multiple"
//!
//! [paths]
//! stage = "data/stages/{stage}.json"
//! ```

use crate::error::ConfigError;
use lifenotes_content::{
    ContentLoader, ContentPaths, ContentSource, DirectorySource, HttpSource,
    DEFAULT_MAX_DOCUMENT_SIZE,
};
use lifenotes_index::DEFAULT_DISCOVER_SAMPLE;
use lifenotes_tracker::DEFAULT_REPLY_DELAY;
use lifenotes_view::ExpansionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default document cache capacity
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Configuration of the whole site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Content directory, or an `http(s)` base URL
    pub content_root: String,
    /// Content path templates
    pub paths: ContentPaths,
    /// Topics shown by an unfiltered discover page
    pub discover_sample: usize,
    /// Card expansion on the knowledge-notes and discover pages
    pub knowledge_expansion: ExpansionMode,
    /// Card expansion on the life-patterns catalogue
    pub pattern_expansion: ExpansionMode,
    /// Base URL of the generations page (for `?stage=` locations)
    pub generations_base: String,
    /// Tracker store file
    pub store_path: PathBuf,
    /// Chat reply delay in milliseconds
    pub chat_reply_delay_ms: u64,
    /// Decoded documents kept in the cache
    pub cache_capacity: u64,
    /// Largest accepted document (bytes)
    pub max_document_size: usize,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit JSON log lines
    pub json_logs: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            content_root: ".".to_string(),
            paths: ContentPaths::default(),
            discover_sample: DEFAULT_DISCOVER_SAMPLE,
            knowledge_expansion: ExpansionMode::Multiple,
            pattern_expansion: ExpansionMode::Single,
            generations_base: "generations.html".to_string(),
            store_path: PathBuf::from("lifenotes-store.json"),
            chat_reply_delay_ms: u64::try_from(DEFAULT_REPLY_DELAY.as_millis()).unwrap_or(400),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

impl NotesConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML config file
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is not a valid config, [`ConfigError::Invalid`] for
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&body, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse TOML text; `origin` names the text in errors
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] or [`ConfigError::Invalid`]
    pub fn from_toml(body: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(body).map_err(|e| ConfigError::parse(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first bad field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::invalid("cache_capacity", "must be at least 1"));
        }
        if self.max_document_size == 0 {
            return Err(ConfigError::invalid("max_document_size", "must be at least 1"));
        }
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::invalid("content_root", "must not be empty"));
        }
        Ok(())
    }

    /// With content root
    #[must_use]
    pub fn with_content_root(mut self, root: impl Into<String>) -> Self {
        self.content_root = root.into();
        self
    }

    /// With store file
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// With discover sample size
    #[must_use]
    pub fn with_discover_sample(mut self, sample: usize) -> Self {
        self.discover_sample = sample;
        self
    }

    /// With pattern catalogue expansion mode
    #[must_use]
    pub fn with_pattern_expansion(mut self, mode: ExpansionMode) -> Self {
        self.pattern_expansion = mode;
        self
    }

    /// With chat reply delay
    #[must_use]
    pub fn with_chat_reply_delay(mut self, delay: Duration) -> Self {
        self.chat_reply_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With JSON log output
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Chat reply delay
    #[must_use]
    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    /// Content source for the configured root
    ///
    /// # Errors
    ///
    /// [`ConfigError::ContentRoot`] if an `http(s)` root is not a valid URL
    pub fn content_source(&self) -> Result<Arc<dyn ContentSource>, ConfigError> {
        let root = self.content_root.trim();
        if root.starts_with("http://") || root.starts_with("https://") {
            let source = HttpSource::new(root).map_err(|e| ConfigError::ContentRoot {
                root: root.to_string(),
                message: e.to_string(),
            })?;
            return Ok(Arc::new(source));
        }
        Ok(Arc::new(DirectorySource::new(root)))
    }

    /// Loader over [`NotesConfig::content_source`] with the configured cache
    /// and size limit
    ///
    /// # Errors
    ///
    /// See [`NotesConfig::content_source`]
    pub fn loader(&self) -> Result<ContentLoader, ConfigError> {
        Ok(ContentLoader::new(self.content_source()?)
            .with_cache_capacity(self.cache_capacity)
            .with_max_document_size(self.max_document_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NotesConfig::default();
        assert_eq!(config.discover_sample, 6);
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(400));
        assert_eq!(config.knowledge_expansion, ExpansionMode::Multiple);
        assert_eq!(config.pattern_expansion, ExpansionMode::Single);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = NotesConfig::from_toml(
            r#"
            discover_sample = 3
            pattern_expansion = "multiple"

            [paths]
            stage = "stages/{stage}.json"
            "#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.discover_sample, 3);
        assert_eq!(config.pattern_expansion, ExpansionMode::Multiple);
        assert_eq!(config.paths.stage_path("high"), "stages/high.json");
        assert_eq!(config.paths.topic_path(lifenotes_content::Category::Mind), "data/shoseijutsu/mind.json");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = NotesConfig::from_toml("cache_capacity = 0", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "cache_capacity", .. }));

        let err = NotesConfig::from_toml("discover_sample = \"many\"", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn builders_override_fields() {
        let config = NotesConfig::new()
            .with_discover_sample(2)
            .with_pattern_expansion(ExpansionMode::Multiple)
            .with_chat_reply_delay(Duration::from_millis(5))
            .with_json_logs(true);
        assert_eq!(config.discover_sample, 2);
        assert_eq!(config.pattern_expansion, ExpansionMode::Multiple);
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(5));
        assert!(config.json_logs);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = NotesConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn http_root_selects_http_source() {
        let config = NotesConfig::new().with_content_root("https://notes.example.org/");
        let source = config.content_source().unwrap();
        assert!(source.describe().contains("notes.example.org"));

        let local = NotesConfig::new().with_content_root("site");
        assert!(local.content_source().unwrap().describe().contains("site"));
    }
}
