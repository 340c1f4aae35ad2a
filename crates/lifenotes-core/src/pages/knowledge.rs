//! Knowledge-notes page
//!
//! A top panel plus one tab per topic category. A category document is
//! fetched the first time its tab is shown; each category then keeps its own
//! search text, active tag and card accordion.

use lifenotes_content::{Category, ContentLoader, ContentPaths, LoadError, TopicDocument};
use lifenotes_index::{FilterEngine, FilterState, TopicIndex};
use lifenotes_router::{tab_bar, Completion, LoadRequest, RequestToken, RouterConfig, TabRouter, TabView, Transition};
use lifenotes_view::render::{error_message, loading, tag_buttons, topic_cards};
use lifenotes_view::{messages, Accordion, CardParts, Element, ExpansionMode};
use std::collections::{HashMap, HashSet};

const TOP_LABEL: &str = "≪トップ≫";

const TOP_INTRO: &str =
    "一周目でつまずきやすいテーマを、5つのOSに分けて整理した処世術ノートです。";

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Mind => "メンタルOS",
        Category::Relation => "人間関係OS",
        Category::Work => "仕事OS",
        Category::Habit => "習慣OS",
        Category::Future => "未来OS",
    }
}

#[derive(Debug)]
struct CategoryPanel {
    filter: FilterState,
    cards: Vec<Element>,
    accordion: Accordion,
}

/// Knowledge-notes page state
#[derive(Debug)]
pub struct KnowledgeNotesPage {
    loader: ContentLoader,
    router: TabRouter<TopicIndex>,
    panels: HashMap<Category, CategoryPanel>,
    failed: HashSet<Category>,
    engine: FilterEngine,
    expansion: ExpansionMode,
}

impl KnowledgeNotesPage {
    /// Page on its top tab
    #[must_use]
    pub fn new(loader: ContentLoader, paths: &ContentPaths, expansion: ExpansionMode) -> Self {
        Self {
            loader,
            router: TabRouter::new(RouterConfig::knowledge_notes(paths)),
            panels: HashMap::new(),
            failed: HashSet::new(),
            engine: FilterEngine::default(),
            expansion,
        }
    }

    /// Active tab id
    #[must_use]
    pub fn active(&self) -> &str {
        self.router.active()
    }

    /// Router state
    #[must_use]
    pub fn router(&self) -> &TabRouter<TopicIndex> {
        &self.router
    }

    /// Tab click
    pub fn select(&mut self, tab: &str) -> Transition {
        self.router.select(tab)
    }

    /// Perform a load issued by [`KnowledgeNotesPage::select`]
    ///
    /// # Errors
    ///
    /// The `LoadError` of the category document
    pub async fn fetch(&self, request: &LoadRequest) -> Result<TopicIndex, LoadError> {
        let category: Category = request.tab.parse().map_err(|_| LoadError::InvalidPath {
            path: request.path.clone(),
        })?;
        let document: TopicDocument = self.loader.load(&request.path).await?;
        Ok(TopicIndex::from_category(category, document.topics))
    }

    /// Report a fetch result
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<TopicIndex, LoadError>,
    ) -> Completion {
        let completion = self.router.complete(token, result);
        match &completion {
            Completion::Failed { tab, .. } => {
                if let Ok(category) = tab.parse::<Category>() {
                    self.failed.insert(category);
                }
            }
            Completion::Applied { tab } => self.apply(tab),
            Completion::Stale => {}
        }
        completion
    }

    fn apply(&mut self, tab: &str) {
        if let Ok(category) = tab.parse::<Category>() {
            tracing::info!(%category, "category ready");
            self.failed.remove(&category);
            self.panels.entry(category).or_insert_with(|| CategoryPanel {
                filter: FilterState::new(),
                cards: Vec::new(),
                accordion: Accordion::new(self.expansion, 0),
            });
            self.rebuild(category);
        }
    }

    /// Select `tab` and perform its load, if any
    pub async fn show(&mut self, tab: &str) -> Transition {
        let transition = self.select(tab);
        if let Transition::Load(request) = &transition {
            let result = self.fetch(request).await;
            self.complete(request.token, result);
        }
        transition
    }

    /// Typing in a category's search box
    pub fn set_search(&mut self, category: Category, search: &str) {
        if let Some(panel) = self.panels.get_mut(&category) {
            panel.filter.set_search(search);
            self.rebuild(category);
        }
    }

    /// Click on a category's tag button
    pub fn toggle_tag(&mut self, category: Category, tag: &str) {
        if let Some(panel) = self.panels.get_mut(&category) {
            panel.filter.toggle_tag(tag);
            self.rebuild(category);
        }
    }

    /// Click on a visible card
    pub fn toggle_card(&mut self, category: Category, index: usize) {
        if let Some(panel) = self.panels.get_mut(&category) {
            panel.accordion.toggle_card(&mut panel.cards, index, CardParts::TOPIC);
        }
    }

    /// Filter state of a loaded category
    #[must_use]
    pub fn filter(&self, category: Category) -> Option<&FilterState> {
        self.panels.get(&category).map(|p| &p.filter)
    }

    /// Re-filter and re-render a category's cards; open cards close
    fn rebuild(&mut self, category: Category) {
        let (Some(index), Some(panel)) = (
            self.router.loaded(category.as_str()),
            self.panels.get_mut(&category),
        ) else {
            return;
        };
        let topics = self.engine.apply(index, &panel.filter);
        panel.accordion = Accordion::new(self.expansion, topics.len());
        panel.cards = topic_cards(topics);
    }

    /// Whole page
    #[must_use]
    pub fn render(&self) -> Element {
        let labels = std::iter::once(("top", TOP_LABEL))
            .chain(Category::ALL.iter().map(|c| (c.as_str(), category_label(*c))));

        let mut root = Element::new("div")
            .with_id("knowledge-notes")
            .with_child(tab_bar(self.router.config(), labels))
            .with_child(
                Element::new("section")
                    .with_id("tab-top")
                    .with_class("tab-panel")
                    .with_child(Element::new("p").with_class("notes-intro").with_text(TOP_INTRO)),
            );
        for category in Category::ALL {
            root.push(self.render_category(category));
        }
        self.router.project(&mut root);
        root
    }

    fn render_category(&self, category: Category) -> Element {
        let id = category.as_str();
        let mut search = Element::new("input")
            .with_class("search-input")
            .with_attr("type", "search")
            .with_attr("data-category", id);
        let mut tags = Element::new("div").with_id(format!("tags-{id}")).with_class("tag-list");
        let mut cards = Element::new("div").with_id(format!("cards-{id}")).with_class("card-list");

        if let Some(panel) = self.panels.get(&category) {
            search.set_attr("value", panel.filter.search.clone());
            if let Some(index) = self.router.loaded(id) {
                tags.replace_children(tag_buttons(
                    index.tags().iter().map(String::as_str),
                    panel.filter.active_tag.as_deref(),
                ));
            }
            cards.replace_children(panel.cards.iter().cloned());
        } else {
            match self.router.view() {
                TabView::Loading { tab } if tab == id => cards.push(loading()),
                _ if self.failed.contains(&category) => {
                    cards.push(error_message("load-error", messages::LOAD_ERROR));
                }
                _ => {}
            }
        }

        Element::new("section")
            .with_id(format!("tab-{id}"))
            .with_class("tab-panel")
            .with_child(search)
            .with_child(tags)
            .with_child(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifenotes_test_utils::{loader_with, sample_site, StaticSource};
    use lifenotes_view::to_text;

    fn page(source: StaticSource) -> KnowledgeNotesPage {
        let (loader, _) = loader_with(source);
        KnowledgeNotesPage::new(loader, &ContentPaths::default(), ExpansionMode::Multiple)
    }

    #[tokio::test]
    async fn mind_tab_search_scenario() {
        let mut page = page(sample_site());
        page.show("mind").await;

        page.set_search(Category::Mind, "a");
        let cards = page.render();
        let panel = cards.find_by_id("cards-mind").unwrap();
        assert_eq!(panel.find_all_by_class("shosei-card").len(), 1);

        page.set_search(Category::Mind, "z");
        let view = page.render();
        let panel = view.find_by_id("cards-mind").unwrap();
        assert_eq!(panel.text_content(), messages::NO_RESULTS);
    }

    #[tokio::test]
    async fn only_active_panel_is_visible() {
        let mut page = page(sample_site());
        page.show("habit").await;
        let view = page.render();

        assert!(view.find_by_id("tab-top").unwrap().is_hidden());
        assert!(!view.find_by_id("tab-habit").unwrap().is_hidden());
        let text = to_text(&view);
        assert!(text.contains("Sleep"));
        assert!(!text.contains(TOP_INTRO));
    }

    #[tokio::test]
    async fn failed_category_shows_message_and_retries() {
        let source = StaticSource::new().with_status("data/shoseijutsu/work.json", 500);
        let mut page = page(source);

        page.show("work").await;
        let view = page.render();
        assert_eq!(
            view.find_by_id("cards-work").unwrap().text_content(),
            messages::LOAD_ERROR
        );

        assert!(matches!(page.show("work").await, Transition::Load(_)));
    }

    #[tokio::test]
    async fn failed_panel_keeps_message_after_switching_away() {
        let source = StaticSource::new().with_status("data/shoseijutsu/work.json", 500);
        let mut page = page(source);

        page.show("work").await;
        page.show("top").await;
        let view = page.render();
        assert!(view.find_by_id("tab-work").unwrap().is_hidden());
        assert_eq!(
            view.find_by_id("cards-work").unwrap().text_content(),
            messages::LOAD_ERROR
        );
    }

    #[tokio::test]
    async fn tag_toggle_and_card_toggle() {
        let mut page = page(sample_site());
        page.show("relation").await;

        page.toggle_card(Category::Relation, 0);
        let view = page.render();
        let cards = view.find_by_id("cards-relation").unwrap();
        assert_eq!(cards.find_all_by_class("is-open").len(), 1);

        let tag = page.router().loaded("relation").unwrap().tags()[0].clone();
        page.toggle_tag(Category::Relation, &tag);
        assert_eq!(page.filter(Category::Relation).unwrap().active_tag.as_deref(), Some(tag.as_str()));

        // Re-rendered cards start collapsed
        let view = page.render();
        let cards = view.find_by_id("cards-relation").unwrap();
        assert!(cards.find_all_by_class("is-open").is_empty());
        let tags = view.find_by_id("tags-relation").unwrap();
        assert_eq!(tags.find_all_by_class("is-active").len(), 1);
    }
}
