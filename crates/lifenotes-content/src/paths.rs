//! Content path templates
//!
//! The site's JSON files follow fixed naming schemes; the templates are
//! configurable so a deployment can relocate them.

use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path templates for every content family
///
/// Placeholders: `{category}`, `{stage}`, `{n}` (1-based file number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPaths {
    /// Topic documents per category
    pub topics: String,
    /// Stage records
    pub stage: String,
    /// Life-pattern cards
    pub pattern: String,
    /// Job directory entries
    pub job: String,
    /// Number of pattern files
    pub pattern_count: usize,
    /// Number of job files
    pub job_count: usize,
    /// Markdown section per page id
    pub sections: BTreeMap<String, String>,
}

impl ContentPaths {
    /// Path of the topic document for `category`
    #[must_use]
    pub fn topic_path(&self, category: Category) -> String {
        self.topics.replace("{category}", category.as_str())
    }

    /// Path of the stage record for `stage`
    #[must_use]
    pub fn stage_path(&self, stage: &str) -> String {
        self.stage.replace("{stage}", stage)
    }

    /// Paths of all pattern files, in display order
    #[must_use]
    pub fn pattern_paths(&self) -> Vec<String> {
        numbered(&self.pattern, self.pattern_count)
    }

    /// Paths of all job files, in display order
    #[must_use]
    pub fn job_paths(&self) -> Vec<String> {
        numbered(&self.job, self.job_count)
    }

    /// Markdown section for a page, if the page has one
    #[must_use]
    pub fn section_path(&self, page: &str) -> Option<&str> {
        self.sections.get(page).map(String::as_str)
    }
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            topics: "data/shoseijutsu/{category}.json".to_string(),
            stage: "data/{stage}.json".to_string(),
            pattern: "data/patterns/pattern{n}.json".to_string(),
            job: "data/jobs/job{n}.json".to_string(),
            pattern_count: 6,
            job_count: 6,
            sections: BTreeMap::new(),
        }
    }
}

fn numbered(template: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| template.replace("{n}", &n.to_string()))
        .collect()
}
