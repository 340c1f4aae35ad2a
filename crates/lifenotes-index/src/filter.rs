//! Keyword, tag and category filtering
//!
//! Filters apply in a fixed order: category, then exact tag, then a
//! case-insensitive substring match of the keyword on title or summary.
//! When nothing is filtered at all, the engine switches to discover mode and
//! returns a random sample instead of the full index.

use crate::index::TopicIndex;
use lifenotes_content::{Category, Topic, UnknownCategory};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Default size of the discover sample
pub const DEFAULT_DISCOVER_SAMPLE: usize = 6;

/// Category selector; `All` is the "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only topics of this category
    Only(Category),
}

impl CategoryFilter {
    /// Whether `topic` passes this selector
    #[inline]
    #[must_use]
    pub fn admits(self, topic: &Topic) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => topic.category == Some(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Transient filter state of one page or tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Category selector
    pub active_category: CategoryFilter,
    /// Raw search box contents
    pub search: String,
    /// Selected tag button
    pub active_tag: Option<String>,
}

impl FilterState {
    /// Unfiltered state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With category selector
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.active_category = category.into();
        self
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// With active tag
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.active_tag = Some(tag.into());
        self
    }

    /// Replace the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Click on a tag button: selecting the active tag again clears it
    ///
    /// Returns the tag now active.
    pub fn toggle_tag(&mut self, tag: &str) -> Option<&str> {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
        self.active_tag.as_deref()
    }

    /// Normalized keyword: trimmed and lower-cased, `None` when blank
    #[must_use]
    pub fn keyword(&self) -> Option<String> {
        let keyword = self.search.trim().to_lowercase();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// Whether no filter is active at all
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.active_category == CategoryFilter::All
            && self.active_tag.is_none()
            && self.keyword().is_none()
    }

    /// Whether `topic` passes every active filter
    #[must_use]
    pub fn matches(&self, topic: &Topic) -> bool {
        self.matches_keyword(topic, self.keyword().as_deref())
    }

    fn matches_keyword(&self, topic: &Topic, keyword: Option<&str>) -> bool {
        if !self.active_category.admits(topic) {
            return false;
        }
        if let Some(tag) = &self.active_tag {
            if !topic.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        match keyword {
            Some(keyword) => {
                topic.title.to_lowercase().contains(keyword)
                    || topic.summary.to_lowercase().contains(keyword)
            }
            None => true,
        }
    }
}

/// How a result set was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// At least one filter active; source order
    Filtered,
    /// No filter active; random sample
    Discover,
}

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// How the topics were selected
    pub mode: FilterMode,
    /// Visible topics
    pub topics: Vec<&'a Topic>,
}

impl FilterOutcome<'_> {
    /// Whether the "no results" message applies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Number of visible topics
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }
}

/// Filter/search engine over a [`TopicIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEngine {
    discover_sample: usize,
}

impl FilterEngine {
    /// Create engine with the given discover sample size
    #[inline]
    #[must_use]
    pub fn new(discover_sample: usize) -> Self {
        Self { discover_sample }
    }

    /// Discover sample size
    #[inline]
    #[must_use]
    pub fn discover_sample(&self) -> usize {
        self.discover_sample
    }

    /// Topics passing `state`, in source order; never samples
    #[must_use]
    pub fn apply<'a>(&self, index: &'a TopicIndex, state: &FilterState) -> Vec<&'a Topic> {
        let keyword = state.keyword();
        index
            .topics()
            .iter()
            .filter(|topic| state.matches_keyword(topic, keyword.as_deref()))
            .collect()
    }

    /// Filter `index` by `state`, sampling when nothing is filtered
    pub fn filter<'a, R>(
        &self,
        index: &'a TopicIndex,
        state: &FilterState,
        rng: &mut R,
    ) -> FilterOutcome<'a>
    where
        R: Rng + ?Sized,
    {
        if state.is_unfiltered() {
            let topics = self.sample(index, rng);
            tracing::debug!(
                total = index.len(),
                sampled = topics.len(),
                "discover sample"
            );
            return FilterOutcome {
                mode: FilterMode::Discover,
                topics,
            };
        }

        let topics = self.apply(index, state);
        tracing::debug!(
            category = %state.active_category,
            tag = state.active_tag.as_deref().unwrap_or(""),
            matches = topics.len(),
            "topics filtered"
        );
        FilterOutcome {
            mode: FilterMode::Filtered,
            topics,
        }
    }

    /// Uniform random sample of at most `discover_sample` topics
    pub fn sample<'a, R>(&self, index: &'a TopicIndex, rng: &mut R) -> Vec<&'a Topic>
    where
        R: Rng + ?Sized,
    {
        let mut topics: Vec<&Topic> = index.topics().iter().collect();
        topics.shuffle(rng);
        topics.truncate(self.discover_sample);
        topics
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOVER_SAMPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn topic(title: &str, summary: &str, tags: &[&str], category: Category) -> Topic {
        Topic {
            title: title.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            ..Topic::default()
        }
        .with_category(category)
    }

    fn mind_index() -> TopicIndex {
        TopicIndex::from_topics(vec![topic("A", "s", &["x"], Category::Mind)])
    }

    #[test]
    fn scenario_search_a_and_z() {
        let engine = FilterEngine::default();
        let index = mind_index();
        let mut rng = StdRng::seed_from_u64(1);

        let state = FilterState::new().with_category(Category::Mind).with_search("a");
        assert_eq!(engine.filter(&index, &state, &mut rng).len(), 1);

        let state = FilterState::new().with_category(Category::Mind).with_search("z");
        assert!(engine.filter(&index, &state, &mut rng).is_empty());
    }

    #[test]
    fn keyword_matches_summary_and_ignores_case() {
        let index = TopicIndex::from_topics(vec![
            topic("Kanji drills", "", &[], Category::Work),
            topic("Other", "learn KANJI daily", &[], Category::Work),
            topic("Nothing", "here", &[], Category::Work),
        ]);
        let engine = FilterEngine::default();

        let lower = engine.apply(&index, &FilterState::new().with_search("kanji"));
        let upper = engine.apply(&index, &FilterState::new().with_search("  KANJI "));
        assert_eq!(lower.len(), 2);
        assert_eq!(lower, upper);
    }

    #[test]
    fn tag_match_is_exact() {
        let index = TopicIndex::from_topics(vec![
            topic("a", "", &["focus"], Category::Habit),
            topic("b", "", &["focused"], Category::Habit),
        ]);
        let result = FilterEngine::default().apply(&index, &FilterState::new().with_tag("focus"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "a");
    }

    #[test]
    fn toggle_tag_twice_clears() {
        let mut state = FilterState::new();
        assert_eq!(state.toggle_tag("calm"), Some("calm"));
        assert_eq!(state.toggle_tag("talk"), Some("talk"));
        assert_eq!(state.toggle_tag("talk"), None);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn blank_search_is_unfiltered() {
        assert!(FilterState::new().with_search("   ").is_unfiltered());
        assert!(!FilterState::new().with_category(Category::Mind).is_unfiltered());
    }

    #[test]
    fn unfiltered_state_samples_at_most_six() {
        let topics = (0..10)
            .map(|i| topic(&format!("t{i}"), "", &[], Category::Future))
            .collect();
        let index = TopicIndex::from_topics(topics);
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = FilterEngine::default().filter(&index, &FilterState::new(), &mut rng);
        assert_eq!(outcome.mode, FilterMode::Discover);
        assert_eq!(outcome.len(), 6);
    }

    #[test]
    fn small_index_sample_is_whole_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let index = mind_index();
        let outcome = FilterEngine::new(6).filter(&index, &FilterState::new(), &mut rng);
        assert_eq!(outcome.len(), 1);
    }

    #[test]
    fn category_filter_parses_all_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "work".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Work))
        );
        assert!("hobby".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
