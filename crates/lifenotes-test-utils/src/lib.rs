//! Testing utilities for the lifenotes workspace
//!
//! Shared test helpers, fixtures, and content sources.

#![allow(missing_docs)]

use async_trait::async_trait;
use lifenotes_content::{ContentLoader, ContentSource, LoadError};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// The scenario document: one `mind` topic titled "A"
pub const MIND_DOCUMENT: &str = r#"{"topics":[{"title":"A","summary":"s","tags":["x"]}]}"#;

#[derive(Debug, Clone)]
enum Response {
    Body(String),
    Status(u16),
}

/// In-memory content source with canned responses and a fetch log
///
/// Paths without a response answer 404.
#[derive(Debug, Default)]
pub struct StaticSource {
    responses: HashMap<String, Response>,
    delays: HashMap<String, Duration>,
    fetched: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `path`
    #[must_use]
    pub fn with(mut self, path: &str, body: impl Into<String>) -> Self {
        self.responses
            .insert(path.to_string(), Response::Body(body.into()));
        self
    }

    /// Serve `value` as JSON at `path`
    #[must_use]
    pub fn with_json(self, path: &str, value: &serde_json::Value) -> Self {
        self.with(path, value.to_string())
    }

    /// Answer `path` with an HTTP status
    #[must_use]
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses
            .insert(path.to_string(), Response::Status(status));
        self
    }

    /// Hold the response for `path` back by `delay`
    #[must_use]
    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    /// Paths fetched so far, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().clone()
    }

    /// How often `path` was fetched
    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetched.lock().iter().filter(|p| *p == path).count()
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.fetched.lock().push(path.to_string());

        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(path) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Status(404)) | None => Err(LoadError::not_found(path)),
            Some(Response::Status(status)) => Err(LoadError::status(path, *status)),
        }
    }

    fn describe(&self) -> String {
        format!("static({} documents)", self.responses.len())
    }
}

/// Loader over a shared [`StaticSource`], keeping a handle for assertions
pub fn loader_with(source: StaticSource) -> (ContentLoader, Arc<StaticSource>) {
    let source = Arc::new(source);
    (ContentLoader::new(source.clone()), source)
}

pub fn topic_json(title: &str, summary: &str, tags: &[&str]) -> serde_json::Value {
    json!({ "title": title, "summary": summary, "tags": tags })
}

pub fn detailed_topic_json(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "summary": format!("{title} summary"),
        "tags": ["focus"],
        "essence": ["observe first"],
        "traps": ["rushing"],
        "actionTips": ["write it down"]
    })
}

pub fn topic_document(topics: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "topics": topics })
}

pub fn stage_json(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "overview": format!("{title} overview"),
        "essence": ["rules", "friends"],
        "commonPaths": [{ "label": "club", "desc": "joins a club" }],
        "pains": ["comparison"],
        "insights": [{ "title": "look wider", "abstract": "structure", "action": "ask" }],
        "choices": [{ "title": "A or B", "insight": "what matters" }],
        "finalLine": "keep going"
    })
}

pub fn pattern_json(n: usize) -> serde_json::Value {
    json!({
        "title": format!("Pattern {n}"),
        "routeLabel": format!("route {n}"),
        "overview": format!("overview {n}"),
        "essence": ["core"],
        "branches": "one branch",
        "pains": ["stuck"],
        "insight": { "abstract": "abs", "twoRoundView": "view", "actionHint": "hint" },
        "finalLine": format!("final {n}")
    })
}

pub fn job_json(n: usize) -> serde_json::Value {
    json!({
        "id": format!("job{n}"),
        "name": format!("Job {n}"),
        "category": "service",
        "examples": "clinic & school",
        "overview": "helps people",
        "howToEnter": ["study"],
        "routine": "morning shift",
        "pains": ["night work"],
        "joys": ["thanks"],
        "twoRoundView": "long view"
    })
}

/// A complete site: every category, every stage except `elementary`,
/// six patterns and six jobs
pub fn sample_site() -> StaticSource {
    let mut source = StaticSource::new()
        .with("data/shoseijutsu/mind.json", MIND_DOCUMENT)
        .with_json(
            "data/shoseijutsu/relation.json",
            &topic_document(vec![
                topic_json("Listen", "hear them out", &["talk"]),
                detailed_topic_json("Boundaries"),
            ]),
        )
        .with_json(
            "data/shoseijutsu/work.json",
            &topic_document(vec![topic_json("Kanji drills", "daily practice", &["study"])]),
        )
        .with_json(
            "data/shoseijutsu/habit.json",
            &topic_document(vec![
                topic_json("Sleep", "same time", &["health"]),
                topic_json("Walk", "ten minutes", &["health", "focus"]),
            ]),
        )
        .with_json(
            "data/shoseijutsu/future.json",
            &topic_document(vec![topic_json("Plan", "one year", &["money"])]),
        );

    for stage in [
        "middle",
        "high",
        "university",
        "earlyCareer",
        "midCareer",
        "lateCareer",
        "secondCareer",
    ] {
        source = source.with_json(&format!("data/{stage}.json"), &stage_json(stage));
    }
    for n in 1..=6 {
        source = source
            .with_json(&format!("data/patterns/pattern{n}.json"), &pattern_json(n))
            .with_json(&format!("data/jobs/job{n}.json"), &job_json(n));
    }
    source
}

/// Write `files` (relative path, body) under a fresh temporary directory
pub fn content_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, body) in files {
        write_file(dir.path(), path, body);
    }
    dir
}

pub fn write_file(root: &Path, path: &str, body: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full, body).unwrap();
}
