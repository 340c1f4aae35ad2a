//! Content loader - main entry point
//!
//! Fetch, size-check, decode and cache content documents. Batches are
//! all-or-nothing: one failed path aborts the whole batch and partial results
//! are discarded.

use crate::cache::DocumentCache;
use crate::error::LoadError;
use crate::model::{Category, Topic, TopicDocument};
use crate::parsers::{DocumentParser, JsonParser, MarkdownParser, MarkdownSection};
use crate::paths::ContentPaths;
use crate::source::ContentSource;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Default maximum document size (2 MiB)
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 2 * 1024 * 1024;

/// Content loader
///
/// The only component that talks to the [`ContentSource`]. Cloning is cheap
/// and clones share the cache.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    /// Where documents come from
    source: Arc<dyn ContentSource>,
    /// Decoded documents by path and type
    cache: DocumentCache,
    /// Maximum body size to decode (bytes)
    max_document_size: usize,
}

impl ContentLoader {
    /// Create loader over `source` with default cache and size limit
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: DocumentCache::default(),
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }

    /// With a cache of the given capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache = DocumentCache::new(capacity);
        self
    }

    /// With a maximum document size
    #[inline]
    #[must_use]
    pub fn with_max_document_size(mut self, bytes: usize) -> Self {
        self.max_document_size = bytes;
        self
    }

    /// Underlying source
    #[inline]
    #[must_use]
    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.source
    }

    /// Get cache reference
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Fetch `path`, enforce the size limit, and decode with `parser`
    async fn fetch_parsed<P: DocumentParser>(
        &self,
        path: &str,
        parser: &P,
    ) -> Result<P::Output, LoadError> {
        tracing::info!(path, source = %self.source.describe(), "fetching content");
        let body = self.source.fetch(path).await?;

        if body.len() > self.max_document_size {
            return Err(LoadError::TooLarge {
                path: path.to_string(),
                size: body.len(),
                max: self.max_document_size,
            });
        }

        parser.parse(path, &body)
    }

    /// Load one JSON document (cached after the first success)
    ///
    /// # Errors
    /// Any `LoadError` from the source, the size check or decoding
    pub async fn load<T>(&self, path: &str) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let document = self
            .cache
            .try_get_or_insert_with(path, || async move {
                self.fetch_parsed(path, &JsonParser::<T>::new()).await
            })
            .await?;
        Ok(T::clone(&document))
    }

    /// Load several JSON documents concurrently, all-or-nothing
    ///
    /// Results are in the order of `paths`.
    ///
    /// # Errors
    /// The first `LoadError` of the batch; successful siblings are discarded
    pub async fn load_all<T>(&self, paths: &[String]) -> Result<Vec<T>, LoadError>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        try_join_all(paths.iter().map(|path| self.load::<T>(path))).await
    }

    /// Load the topic documents of `categories` and tag each topic with its
    /// category; order is category order, then document order
    ///
    /// # Errors
    /// The first `LoadError` of the batch
    pub async fn load_topics(
        &self,
        paths: &ContentPaths,
        categories: &[Category],
    ) -> Result<Vec<Topic>, LoadError> {
        let documents: Vec<TopicDocument> = self
            .load_all(
                &categories
                    .iter()
                    .map(|c| paths.topic_path(*c))
                    .collect::<Vec<_>>(),
            )
            .await?;

        let topics: Vec<Topic> = categories
            .iter()
            .zip(documents)
            .flat_map(|(category, doc)| {
                doc.topics
                    .into_iter()
                    .map(move |topic| topic.with_category(*category))
            })
            .collect();

        tracing::debug!(
            categories = categories.len(),
            topics = topics.len(),
            "topic documents loaded"
        );
        Ok(topics)
    }

    /// Load and render a markdown section (cached after the first success)
    ///
    /// # Errors
    /// Any `LoadError` from the source or the size check
    pub async fn load_markdown(&self, path: &str) -> Result<MarkdownSection, LoadError> {
        let section = self
            .cache
            .try_get_or_insert_with(path, || async move {
                self.fetch_parsed(path, &MarkdownParser::new()).await
            })
            .await?;
        Ok(MarkdownSection::clone(&section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StageRecord;
    use crate::source::DirectorySource;
    use std::path::Path;

    fn write(root: &Path, rel: &str, body: &str) {
        let full = root.join(rel);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(full, body).unwrap();
    }

    fn loader_for(root: &Path) -> ContentLoader {
        ContentLoader::new(Arc::new(DirectorySource::new(root)))
    }

    #[tokio::test]
    async fn load_caches_decoded_document() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "data/high.json", r#"{"title":"High"}"#);
        let loader = loader_for(dir.path());

        let first: StageRecord = loader.load("data/high.json").await.unwrap();
        assert_eq!(first.title, "High");

        // Served from cache even after the file disappears
        std::fs::remove_file(dir.path().join("data/high.json")).unwrap();
        let second: StageRecord = loader.load("data/high.json").await.unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn load_all_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "data/a.json", r#"{"title":"A"}"#);
        let loader = loader_for(dir.path());

        let result = loader
            .load_all::<StageRecord>(&["data/a.json".to_string(), "data/b.json".to_string()])
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.path(), "data/b.json");
        assert_eq!(err.http_status(), Some(404));
    }

    #[tokio::test]
    async fn load_topics_tags_category() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "data/shoseijutsu/mind.json",
            r#"{"topics":[{"title":"m1"},{"title":"m2"}]}"#,
        );
        write(
            dir.path(),
            "data/shoseijutsu/work.json",
            r#"{"topics":[{"title":"w1"}]}"#,
        );
        let loader = loader_for(dir.path());

        let topics = loader
            .load_topics(&ContentPaths::default(), &[Category::Mind, Category::Work])
            .await
            .unwrap();

        let titles: Vec<_> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["m1", "m2", "w1"]);
        assert_eq!(topics[0].category, Some(Category::Mind));
        assert_eq!(topics[2].category, Some(Category::Work));
    }

    #[tokio::test]
    async fn oversized_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "data/big.json", &format!(r#"{{"title":"{}"}}"#, "x".repeat(64)));
        let loader = loader_for(dir.path()).with_max_document_size(16);

        let err = loader.load::<StageRecord>("data/big.json").await.unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { max: 16, .. }));
    }

    #[tokio::test]
    async fn load_markdown_renders_html() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "contents/home.md", "# Home\n\nhello\n");
        let loader = loader_for(dir.path());

        let section = loader.load_markdown("contents/home.md").await.unwrap();
        assert_eq!(section.title.as_deref(), Some("Home"));
        assert!(section.html.contains("<p>hello</p>"));
    }
}
