//! Topic discovery: every category in one index
//!
//! With no filter active the page shows a random sample; otherwise the
//! filtered topics in source order.

use lifenotes_content::{Category, ContentLoader, ContentPaths, LoadError, Topic};
use lifenotes_index::{CategoryFilter, FilterEngine, FilterMode, FilterState, TopicIndex};
use lifenotes_view::render::{error_message, tag_buttons, topic_cards};
use lifenotes_view::{messages, Accordion, CardParts, Element, ExpansionMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Load state of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexState {
    /// Not requested yet
    Empty,
    /// All category documents loaded
    Ready,
    /// A category document failed; nothing is shown
    Failed {
        /// Path that failed
        path: String,
    },
}

/// Discover page state
#[derive(Debug)]
pub struct DiscoverPage {
    loader: ContentLoader,
    paths: ContentPaths,
    index: TopicIndex,
    state: IndexState,
    filter: FilterState,
    engine: FilterEngine,
    rng: StdRng,
    mode: FilterMode,
    visible: Vec<Topic>,
    cards: Vec<Element>,
    accordion: Accordion,
    expansion: ExpansionMode,
}

impl DiscoverPage {
    /// Page drawing `sample` topics when unfiltered
    #[must_use]
    pub fn new(loader: ContentLoader, paths: ContentPaths, sample: usize, expansion: ExpansionMode) -> Self {
        Self {
            loader,
            paths,
            index: TopicIndex::new(),
            state: IndexState::Empty,
            filter: FilterState::new(),
            engine: FilterEngine::new(sample),
            rng: StdRng::seed_from_u64(rand::rng().random()),
            mode: FilterMode::Discover,
            visible: Vec::new(),
            cards: Vec::new(),
            accordion: Accordion::new(expansion, 0),
            expansion,
        }
    }

    /// Make sampling reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Load every category document into the index
    ///
    /// A failure is logged and leaves the page in [`IndexState::Failed`].
    pub async fn load(&mut self) -> &IndexState {
        match self.loader.load_topics(&self.paths, &Category::ALL).await {
            Ok(topics) => {
                self.index = TopicIndex::from_topics(topics);
                self.state = IndexState::Ready;
                tracing::info!(topics = self.index.len(), "topic index ready");
                self.refresh();
            }
            Err(error) => {
                tracing::error!(path = error.path(), %error, "topic index failed to load");
                self.state = IndexState::Failed {
                    path: error.path().to_string(),
                };
            }
        }
        &self.state
    }

    /// Index load state
    #[must_use]
    pub fn state(&self) -> &IndexState {
        &self.state
    }

    /// The loaded index
    #[must_use]
    pub fn index(&self) -> &TopicIndex {
        &self.index
    }

    /// Current filter
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Sampling or filtering
    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Topics currently shown
    #[must_use]
    pub fn visible(&self) -> &[Topic] {
        &self.visible
    }

    /// Category selector change
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.active_category = category;
        self.refresh();
    }

    /// Search box change
    pub fn set_search(&mut self, search: &str) {
        self.filter.set_search(search);
        self.refresh();
    }

    /// Tag button click
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
        self.refresh();
    }

    /// Card click
    pub fn toggle_card(&mut self, index: usize) {
        self.accordion.toggle_card(&mut self.cards, index, CardParts::TOPIC);
    }

    fn refresh(&mut self) {
        if self.state != IndexState::Ready {
            return;
        }
        let outcome = self.engine.filter(&self.index, &self.filter, &mut self.rng);
        self.mode = outcome.mode;
        self.visible = outcome.topics.into_iter().cloned().collect();
        self.accordion = Accordion::new(self.expansion, self.visible.len());
        self.cards = topic_cards(&self.visible);
    }

    /// Whole page
    #[must_use]
    pub fn render(&self) -> Element {
        let root = Element::new("div")
            .with_id("discover")
            .with_child(
                Element::new("input")
                    .with_class("search-input")
                    .with_attr("type", "search")
                    .with_attr("data-category", self.filter.active_category.to_string())
                    .with_attr("value", self.filter.search.clone()),
            );

        if let IndexState::Failed { .. } = self.state {
            return root.with_child(error_message("load-error", messages::LOAD_ERROR));
        }

        root.with_child(
            Element::new("div").with_id("discover-tags").with_class("tag-list").with_children(
                tag_buttons(
                    self.index.tags().iter().map(String::as_str),
                    self.filter.active_tag.as_deref(),
                ),
            ),
        )
        .with_child(
            Element::new("div")
                .with_id("discover-cards")
                .with_class("card-list")
                .with_children(self.cards.iter().cloned()),
        )
    }
}
