//! Content documents
//!
//! Typed views of the static JSON files the site is built from. All fields
//! are decoded leniently (see [`crate::lenient`]); a document that is valid
//! JSON always yields a record, with blank sections where data is missing.

use crate::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic category of the knowledge notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mindset and emotions
    Mind,
    /// Relationships
    Relation,
    /// Work and career
    Work,
    /// Habits and routines
    Habit,
    /// Future planning
    Future,
}

impl Category {
    /// All categories, in tab order
    pub const ALL: [Category; 5] = [
        Category::Mind,
        Category::Relation,
        Category::Work,
        Category::Habit,
        Category::Future,
    ];

    /// Identifier used in paths and tab ids
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mind => "mind",
            Category::Relation => "relation",
            Category::Work => "work",
            Category::Habit => "habit",
            Category::Future => "future",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown category identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One tip card
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Card title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// One-line summary
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    /// Tag chips
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    /// Core points
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub essence: Vec<String>,
    /// Common traps
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub traps: Vec<String>,
    /// Concrete action tips
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub action_tips: Vec<String>,
    /// Source category, attached at load time
    #[serde(skip)]
    pub category: Option<Category>,
}

impl Topic {
    /// Tag this topic with its source category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// A category document: `{ "topics": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TopicDocument {
    /// Topics in source order
    #[serde(default, deserialize_with = "lenient::records")]
    pub topics: Vec<Topic>,
}

/// One life stage (chapter) with its fixed 7-part structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    /// Stage title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Overview paragraph
    #[serde(default, deserialize_with = "lenient::string")]
    pub overview: String,
    /// Essence keywords, shown as pills
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub essence: Vec<String>,
    /// Typical branching paths
    #[serde(default, deserialize_with = "lenient::records")]
    pub common_paths: Vec<CommonPath>,
    /// Typical worries
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub pains: Vec<String>,
    /// Second-round insights
    #[serde(default, deserialize_with = "lenient::records")]
    pub insights: Vec<Insight>,
    /// Choice compass entries
    #[serde(default, deserialize_with = "lenient::records")]
    pub choices: Vec<Choice>,
    /// Closing line
    #[serde(default, deserialize_with = "lenient::string")]
    pub final_line: String,
}

/// A branching path inside a stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CommonPath {
    /// Short label
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    /// Description
    #[serde(default, deserialize_with = "lenient::string")]
    pub desc: String,
}

/// A second-round insight inside a stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Insight {
    /// Insight title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Abstracted lesson
    #[serde(default, rename = "abstract", deserialize_with = "lenient::string")]
    pub abstraction: String,
    /// Suggested action
    #[serde(default, deserialize_with = "lenient::string")]
    pub action: String,
}

/// A choice-compass entry inside a stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Choice {
    /// Choice title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// What to weigh
    #[serde(default, deserialize_with = "lenient::string")]
    pub insight: String,
}

/// A life-pattern card (`data/patterns/pattern<N>.json`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    /// Pattern title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Route label under the title
    #[serde(default, deserialize_with = "lenient::string")]
    pub route_label: String,
    /// Always-visible summary
    #[serde(default, deserialize_with = "lenient::string")]
    pub overview: String,
    /// Essence of the route
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub essence: Vec<String>,
    /// Frequent branches
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub branches: Vec<String>,
    /// Stumbling points
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub pains: Vec<String>,
    /// Three-line insight
    #[serde(default, deserialize_with = "lenient::object")]
    pub insight: Option<PatternInsight>,
    /// Closing line
    #[serde(default, deserialize_with = "lenient::string")]
    pub final_line: String,
}

/// Insight block of a pattern card
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInsight {
    /// Abstracted lesson
    #[serde(default, rename = "abstract", deserialize_with = "lenient::string")]
    pub abstraction: String,
    /// Second-round view
    #[serde(default, deserialize_with = "lenient::string")]
    pub two_round_view: String,
    /// Action hint
    #[serde(default, deserialize_with = "lenient::string")]
    pub action_hint: String,
}

/// A job directory entry (`data/jobs/job<N>.json`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Stable identifier used by the tag buttons
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Job category label
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    /// Concrete examples
    #[serde(default, deserialize_with = "lenient::string")]
    pub examples: String,
    /// Overview paragraph
    #[serde(default, deserialize_with = "lenient::string")]
    pub overview: String,
    /// How to get in
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub how_to_enter: Vec<String>,
    /// Typical day
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub routine: Vec<String>,
    /// Common worries
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub pains: Vec<String>,
    /// Rewards
    #[serde(default, deserialize_with = "lenient::string_or_list")]
    pub joys: Vec<String>,
    /// Second-round view
    #[serde(default, deserialize_with = "lenient::string")]
    pub two_round_view: String,
}
