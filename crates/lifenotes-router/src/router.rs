//! Tab/stage router
//!
//! One configurable router serves every tabbed page. It owns the active tab,
//! the content loaded for each tab, and the token of the latest load, so a
//! response that arrives after the reader moved on is recognised as stale.
//!
//! # Transitions
//!
//! ```text
//! select(unknown)          -> Ignored
//! select(active)           -> NoOp          (Retry when its load failed)
//! select(top)              -> ShowTop
//! select(cached tab)       -> ShowCached
//! select(other tab)        -> Load { token, path }
//! complete(latest, Ok)     -> Applied       (cached)
//! complete(latest, Err)    -> Failed        (not cached)
//! complete(older token, _) -> Stale
//! ```

use crate::query;
use indexmap::IndexMap;
use lifenotes_content::{Category, ContentPaths};
use lifenotes_view::messages::class;
use lifenotes_view::Element;
use std::collections::HashMap;
use std::fmt;

/// Stage ids of the generations page, in tab order
pub const GENERATION_STAGES: [&str; 8] = [
    "elementary",
    "middle",
    "high",
    "university",
    "earlyCareer",
    "midCareer",
    "lateCareer",
    "secondCareer",
];

/// Identifies one load request; later requests carry larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Id of the static tab (never fetched)
    pub top: String,
    /// Fetched tabs: id -> content path, in tab order
    pub tabs: IndexMap<String, String>,
    /// Panel element id per tab id
    pub panels: IndexMap<String, String>,
    /// Query parameter carrying the active tab; `None` keeps the URL fixed
    pub query_key: Option<String>,
    /// Page path used for replacement URLs
    pub base_path: String,
    /// Class of the tab buttons
    pub tab_class: String,
    /// Class marking the active tab button
    pub active_class: String,
}

impl RouterConfig {
    /// Router with only the static `top` tab
    #[must_use]
    pub fn new(top: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            tabs: IndexMap::new(),
            panels: IndexMap::new(),
            query_key: None,
            base_path: String::new(),
            tab_class: "tab".to_string(),
            active_class: class::IS_ACTIVE.to_string(),
        }
    }

    /// With a fetched tab
    #[must_use]
    pub fn with_tab(mut self, id: impl Into<String>, path: impl Into<String>) -> Self {
        self.tabs.insert(id.into(), path.into());
        self
    }

    /// With a panel for a tab
    #[must_use]
    pub fn with_panel(mut self, tab: impl Into<String>, panel: impl Into<String>) -> Self {
        self.panels.insert(tab.into(), panel.into());
        self
    }

    /// With query parameter
    #[inline]
    #[must_use]
    pub fn with_query_key(mut self, key: impl Into<String>) -> Self {
        self.query_key = Some(key.into());
        self
    }

    /// With page path
    #[inline]
    #[must_use]
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        self.base_path = base.into();
        self
    }

    /// With tab button classes
    #[inline]
    #[must_use]
    pub fn with_tab_classes(mut self, tab: impl Into<String>, active: impl Into<String>) -> Self {
        self.tab_class = tab.into();
        self.active_class = active.into();
        self
    }

    /// Generations page: `?stage=` over the eight life stages
    #[must_use]
    pub fn generations(paths: &ContentPaths, base_path: &str) -> Self {
        GENERATION_STAGES
            .iter()
            .fold(Self::new("top"), |config, stage| {
                config.with_tab(*stage, paths.stage_path(stage))
            })
            .with_query_key("stage")
            .with_base_path(base_path)
            .with_tab_classes("gen-tab", class::GEN_TAB_ACTIVE)
    }

    /// Knowledge-notes page: one panel per category plus the top panel
    #[must_use]
    pub fn knowledge_notes(paths: &ContentPaths) -> Self {
        Category::ALL
            .iter()
            .fold(
                Self::new("top").with_panel("top", "tab-top"),
                |config, category| {
                    config
                        .with_tab(category.as_str(), paths.topic_path(*category))
                        .with_panel(category.as_str(), format!("tab-{category}"))
                },
            )
            .with_tab_classes("notes-tab", class::IS_ACTIVE)
    }

    /// Whether `id` names a tab of this router
    #[must_use]
    pub fn is_known(&self, id: &str) -> bool {
        id == self.top || self.tabs.contains_key(id)
    }

    /// All tab ids in order, top first
    pub fn tab_ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.top.as_str()).chain(self.tabs.keys().map(String::as_str))
    }
}

/// A fetch the caller must perform and report back through
/// [`TabRouter::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Token to pass back with the result
    pub token: RequestToken,
    /// Tab being loaded
    pub tab: String,
    /// Content path to fetch
    pub path: String,
}

/// Outcome of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Unknown tab id; nothing changed
    Ignored,
    /// Tab already active; nothing changed
    NoOp,
    /// Static top view is now shown
    ShowTop,
    /// Previously loaded content is now shown
    ShowCached {
        /// Active tab
        tab: String,
    },
    /// Content must be fetched; a loading placeholder is shown meanwhile
    Load(LoadRequest),
}

/// Outcome of reporting a load result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Result belongs to the latest request and is now shown
    Applied {
        /// Tab that received content
        tab: String,
    },
    /// Latest request failed; the failure message is shown
    Failed {
        /// Tab whose load failed
        tab: String,
        /// Path that failed
        path: String,
    },
    /// Result of a superseded request; discarded
    Stale,
}

/// What the content area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabView {
    /// Static top view
    Top,
    /// Loading placeholder
    Loading {
        /// Tab being loaded
        tab: String,
    },
    /// Loaded content of a tab
    Ready {
        /// Active tab
        tab: String,
    },
    /// Load failure message
    Failed {
        /// Active tab
        tab: String,
        /// Path that failed
        path: String,
    },
}

/// Visibility of one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelProjection {
    /// Panel element id
    pub panel_id: String,
    /// Whether the panel is shown
    pub visible: bool,
}

/// Tab/stage router over content of type `T`
#[derive(Debug, Clone)]
pub struct TabRouter<T> {
    config: RouterConfig,
    active: String,
    view: TabView,
    loaded: HashMap<String, T>,
    pending: Option<LoadRequest>,
    next_token: u64,
}

impl<T> TabRouter<T> {
    /// Create router showing the top tab
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        let active = config.top.clone();
        Self {
            config,
            active,
            view: TabView::Top,
            loaded: HashMap::new(),
            pending: None,
            next_token: 0,
        }
    }

    /// Create router and select the tab named by `query`
    ///
    /// A missing or unknown id selects the top tab.
    #[must_use]
    pub fn from_query(config: RouterConfig, query: &str) -> (Self, Transition) {
        let initial = config
            .query_key
            .as_deref()
            .and_then(|key| query::query_param(query, key))
            .filter(|id| config.is_known(id));

        let mut router = Self::new(config);
        let transition = match initial {
            Some(id) if id != router.config.top => router.select(&id),
            _ => Transition::ShowTop,
        };
        (router, transition)
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Active tab id
    #[inline]
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn view(&self) -> &TabView {
        &self.view
    }

    /// Request awaiting its result
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<&LoadRequest> {
        self.pending.as_ref()
    }

    /// Content of the active tab, when shown
    #[must_use]
    pub fn content(&self) -> Option<&T> {
        match &self.view {
            TabView::Ready { tab } => self.loaded.get(tab),
            _ => None,
        }
    }

    /// Loaded content of any tab
    #[must_use]
    pub fn loaded(&self, tab: &str) -> Option<&T> {
        self.loaded.get(tab)
    }

    /// Reader selects tab `id`
    pub fn select(&mut self, id: &str) -> Transition {
        if !self.config.is_known(id) {
            tracing::warn!(tab = id, "ignoring unknown tab");
            return Transition::Ignored;
        }

        let retry = matches!(&self.view, TabView::Failed { tab, .. } if tab == id);
        if id == self.active && !retry {
            return Transition::NoOp;
        }

        self.active = id.to_string();

        if id == self.config.top {
            self.pending = None;
            self.view = TabView::Top;
            tracing::debug!(tab = id, "showing top");
            return Transition::ShowTop;
        }

        if self.loaded.contains_key(id) {
            self.pending = None;
            self.view = TabView::Ready { tab: id.to_string() };
            tracing::debug!(tab = id, "showing cached content");
            return Transition::ShowCached { tab: id.to_string() };
        }

        let Some(path) = self.config.tabs.get(id).cloned() else {
            return Transition::Ignored;
        };
        self.next_token += 1;
        let request = LoadRequest {
            token: RequestToken(self.next_token),
            tab: id.to_string(),
            path,
        };
        tracing::debug!(tab = id, token = %request.token, path = %request.path, "loading tab");
        self.pending = Some(request.clone());
        self.view = TabView::Loading { tab: id.to_string() };
        Transition::Load(request)
    }

    /// Report the result of a [`LoadRequest`]
    pub fn complete<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<T, E>,
    ) -> Completion {
        let Some(request) = self.take_pending(token) else {
            tracing::debug!(%token, "discarding stale response");
            return Completion::Stale;
        };

        match result {
            Ok(content) => {
                self.loaded.insert(request.tab.clone(), content);
                self.view = TabView::Ready {
                    tab: request.tab.clone(),
                };
                Completion::Applied { tab: request.tab }
            }
            Err(error) => {
                tracing::error!(tab = %request.tab, path = %request.path, %error, "tab content failed to load");
                self.view = TabView::Failed {
                    tab: request.tab.clone(),
                    path: request.path.clone(),
                };
                Completion::Failed {
                    tab: request.tab,
                    path: request.path,
                }
            }
        }
    }

    fn take_pending(&mut self, token: RequestToken) -> Option<LoadRequest> {
        if self.pending.as_ref().is_some_and(|r| r.token == token) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Replacement URL for the active tab (history replacement, no new entry)
    #[must_use]
    pub fn location(&self) -> String {
        let value = (self.active != self.config.top).then_some(self.active.as_str());
        match &self.config.query_key {
            Some(key) => query::location(&self.config.base_path, key, value),
            None => self.config.base_path.clone(),
        }
    }

    /// Visibility of every configured panel
    #[must_use]
    pub fn panels(&self) -> Vec<PanelProjection> {
        self.config
            .panels
            .iter()
            .map(|(tab, panel)| PanelProjection {
                panel_id: panel.clone(),
                visible: *tab == self.active,
            })
            .collect()
    }

    /// Project active tab and panel state onto a page view
    ///
    /// Tab buttons are the elements carrying the configured tab class; their
    /// `data-tab` attribute names the tab.
    pub fn project(&self, root: &mut Element) {
        for panel in self.panels() {
            if let Some(el) = root.find_by_id_mut(&panel.panel_id) {
                el.set_hidden(!panel.visible);
                el.toggle_class(class::IS_ACTIVE, panel.visible);
            }
        }
        project_tabs(root, &self.config.tab_class, &self.config.active_class, &self.active);
    }
}

fn project_tabs(el: &mut Element, tab_class: &str, active_class: &str, active: &str) {
    if el.has_class(tab_class) {
        let is_active = el.attr("data-tab") == Some(active);
        el.toggle_class(active_class, is_active);
    }
    for child in el.child_elements_mut() {
        project_tabs(child, tab_class, active_class, active);
    }
}

/// Tab bar whose buttons [`TabRouter::project`] recognises
#[must_use]
pub fn tab_bar<'a>(config: &RouterConfig, labels: impl IntoIterator<Item = (&'a str, &'a str)>) -> Element {
    Element::new("nav").with_class("tab-bar").with_children(labels.into_iter().map(|(id, label)| {
        Element::new("button")
            .with_class(&config.tab_class)
            .with_attr("type", "button")
            .with_attr("data-tab", id)
            .with_text(label)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> TabRouter<String> {
        TabRouter::new(RouterConfig::generations(&ContentPaths::default(), "/gen.html"))
    }

    fn load(transition: Transition) -> LoadRequest {
        match transition {
            Transition::Load(request) => request,
            other => panic!("expected load, got {other:?}"),
        }
    }

    #[test]
    fn initial_state_from_query() {
        let config = RouterConfig::generations(&ContentPaths::default(), "/gen.html");
        let (router, transition) = TabRouter::<String>::from_query(config.clone(), "?stage=high");
        assert_eq!(router.active(), "high");
        assert_eq!(load(transition).path, "data/high.json");

        let (router, transition) = TabRouter::<String>::from_query(config.clone(), "?stage=nope");
        assert_eq!(router.active(), "top");
        assert_eq!(transition, Transition::ShowTop);

        let (router, _) = TabRouter::<String>::from_query(config, "");
        assert_eq!(router.view(), &TabView::Top);
    }

    #[test]
    fn unknown_and_active_selections() {
        let mut router = router();
        assert_eq!(router.select("kindergarten"), Transition::Ignored);
        assert_eq!(router.select("top"), Transition::NoOp);
        assert_eq!(router.active(), "top");
    }

    #[test]
    fn success_is_cached() {
        let mut router = router();
        let request = load(router.select("middle"));
        assert_eq!(router.view(), &TabView::Loading { tab: "middle".into() });

        let done = router.complete::<String>(request.token, Ok("middle data".into()));
        assert_eq!(done, Completion::Applied { tab: "middle".into() });
        assert_eq!(router.content().map(String::as_str), Some("middle data"));

        assert_eq!(router.select("top"), Transition::ShowTop);
        assert_eq!(
            router.select("middle"),
            Transition::ShowCached { tab: "middle".into() }
        );
    }

    #[test]
    fn failure_is_not_cached_and_retries() {
        let mut router = router();
        let request = load(router.select("elementary"));

        let done = router.complete::<&str>(request.token, Err("404"));
        assert_eq!(
            done,
            Completion::Failed {
                tab: "elementary".into(),
                path: "data/elementary.json".into()
            }
        );
        assert!(router.loaded("elementary").is_none());

        let retry = load(router.select("elementary"));
        assert!(retry.token > request.token);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut router = router();
        let first = load(router.select("elementary"));
        let second = load(router.select("high"));

        assert_eq!(
            router.complete::<String>(first.token, Ok("old".into())),
            Completion::Stale
        );
        assert_eq!(router.view(), &TabView::Loading { tab: "high".into() });
        assert!(router.loaded("elementary").is_none());

        assert_eq!(
            router.complete::<String>(second.token, Ok("new".into())),
            Completion::Applied { tab: "high".into() }
        );
    }

    #[test]
    fn leaving_for_top_makes_pending_stale() {
        let mut router = router();
        let request = load(router.select("university"));
        router.select("top");
        assert_eq!(
            router.complete::<String>(request.token, Ok("late".into())),
            Completion::Stale
        );
        assert_eq!(router.view(), &TabView::Top);
    }

    #[test]
    fn tab_ids_start_with_top() {
        let config = RouterConfig::generations(&ContentPaths::default(), "/gen.html");
        let ids: Vec<_> = config.tab_ids().collect();
        assert_eq!(ids.first(), Some(&"top"));
        assert!(ids.contains(&"elementary"));
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn location_follows_active_tab() {
        let mut router = router();
        assert_eq!(router.location(), "/gen.html");
        router.select("earlyCareer");
        assert_eq!(router.location(), "/gen.html?stage=earlyCareer");
    }

    #[test]
    fn panels_and_tabs_project() {
        let config = RouterConfig::knowledge_notes(&ContentPaths::default());
        let mut router = TabRouter::<String>::new(config.clone());
        router.select("work");

        let visible: Vec<_> = router
            .panels()
            .into_iter()
            .filter(|p| p.visible)
            .map(|p| p.panel_id)
            .collect();
        assert_eq!(visible, vec!["tab-work"]);

        let mut page = Element::new("main")
            .with_child(tab_bar(&config, [("top", "Top"), ("work", "Work")]))
            .with_child(Element::new("section").with_id("tab-top"))
            .with_child(Element::new("section").with_id("tab-work"));
        router.project(&mut page);

        assert!(page.find_by_id("tab-top").unwrap().is_hidden());
        assert!(!page.find_by_id("tab-work").unwrap().is_hidden());
        let tabs = page.find_all_by_class("notes-tab");
        assert!(!tabs[0].has_class("is-active"));
        assert!(tabs[1].has_class("is-active"));
    }
}
