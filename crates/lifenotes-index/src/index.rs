//! Topic index
//!
//! Provides [`TopicIndex`], the in-memory list of topics concatenated from
//! the category documents, with a first-seen tag set for the tag buttons.

use indexmap::IndexSet;
use lifenotes_content::{Category, Topic};

/// All topics of a session, in source order
///
/// Built once from loaded topics and never mutated; a reload builds a new
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIndex {
    topics: Vec<Topic>,
    tags: IndexSet<String>,
}

impl TopicIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build index from topics already tagged with their category
    #[must_use]
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        let tags = collect_tags(topics.iter());
        Self { topics, tags }
    }

    /// Build index from one category's topics, tagging each with `category`
    #[must_use]
    pub fn from_category(category: Category, topics: Vec<Topic>) -> Self {
        Self::from_topics(
            topics
                .into_iter()
                .map(|t| t.with_category(category))
                .collect(),
        )
    }

    /// Append another batch (e.g. a category loaded later)
    pub fn extend(&mut self, topics: impl IntoIterator<Item = Topic>) {
        for topic in topics {
            for tag in &topic.tags {
                if !tag.is_empty() && !self.tags.contains(tag) {
                    self.tags.insert(tag.clone());
                }
            }
            self.topics.push(topic);
        }
    }

    /// All topics in source order
    #[inline]
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of topics
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the index holds no topics
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Distinct non-empty tags in first-seen order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Topics of one category, in source order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Topic> + '_ {
        self.topics
            .iter()
            .filter(move |t| t.category == Some(category))
    }

    /// Distinct tags of one category, in first-seen order
    #[must_use]
    pub fn tags_in(&self, category: Category) -> IndexSet<String> {
        collect_tags(self.in_category(category))
    }

    /// Categories present in the index, in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let seen: IndexSet<Category> = self.topics.iter().filter_map(|t| t.category).collect();
        seen.into_iter().collect()
    }
}

impl FromIterator<Topic> for TopicIndex {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        Self::from_topics(iter.into_iter().collect())
    }
}

fn collect_tags<'a>(topics: impl Iterator<Item = &'a Topic>) -> IndexSet<String> {
    topics
        .flat_map(|t| t.tags.iter())
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect()
}
