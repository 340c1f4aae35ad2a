//! Generations page: the static life map plus one record per life stage

use lifenotes_content::{ContentLoader, ContentPaths, LoadError, StageRecord};
use lifenotes_router::{
    tab_bar, Completion, LoadRequest, RequestToken, RouterConfig, TabRouter, TabView, Transition,
    GENERATION_STAGES,
};
use lifenotes_view::render::{error_card, loading, stage_view, top_view};
use lifenotes_view::{messages, Element};

const STAGE_LABELS: [&str; 8] = [
    "小学生",
    "中学生",
    "高校生",
    "大学・専門期",
    "社会人前期",
    "社会人中期",
    "社会人後期",
    "セカンドキャリア",
];

const TOP_LABEL: &str = "全体マップ";

/// Generations page state
#[derive(Debug)]
pub struct GenerationsPage {
    loader: ContentLoader,
    router: TabRouter<StageRecord>,
}

impl GenerationsPage {
    /// Page for the query string of the initial URL
    ///
    /// Returns the page and the transition the query selects (a load for a
    /// valid stage id, [`Transition::ShowTop`] otherwise).
    #[must_use]
    pub fn open(
        loader: ContentLoader,
        paths: &ContentPaths,
        base_path: &str,
        query: &str,
    ) -> (Self, Transition) {
        let config = RouterConfig::generations(paths, base_path);
        let (router, transition) = TabRouter::from_query(config, query);
        (Self { loader, router }, transition)
    }

    /// Router state
    #[must_use]
    pub fn router(&self) -> &TabRouter<StageRecord> {
        &self.router
    }

    /// Replacement URL for the active stage
    #[must_use]
    pub fn location(&self) -> String {
        self.router.location()
    }

    /// Stage tab click
    pub fn select(&mut self, stage: &str) -> Transition {
        self.router.select(stage)
    }

    /// Perform a stage load
    ///
    /// # Errors
    ///
    /// The `LoadError` of the stage record
    pub async fn fetch(&self, request: &LoadRequest) -> Result<StageRecord, LoadError> {
        self.loader.load(&request.path).await
    }

    /// Report a stage load; stale tokens are discarded
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<StageRecord, LoadError>,
    ) -> Completion {
        self.router.complete(token, result)
    }

    /// Perform `transition` if it is a load
    pub async fn run(&mut self, transition: &Transition) -> Option<Completion> {
        let Transition::Load(request) = transition else {
            return None;
        };
        let result = self.fetch(request).await;
        Some(self.complete(request.token, result))
    }

    /// Select `stage` and perform its load, if any
    pub async fn show(&mut self, stage: &str) -> Transition {
        let transition = self.select(stage);
        self.run(&transition).await;
        transition
    }

    /// Content area for the current view
    #[must_use]
    pub fn render_content(&self) -> Element {
        let content = match self.router.view() {
            TabView::Top => top_view(),
            TabView::Loading { .. } => loading(),
            TabView::Ready { .. } => self.router.content().map_or_else(loading, stage_view),
            TabView::Failed { path, .. } => error_card(&messages::stage_load_error(path)),
        };
        Element::new("div").with_id("gen-content").with_child(content)
    }

    /// Whole page: stage tabs and content
    #[must_use]
    pub fn render(&self) -> Element {
        let labels = std::iter::once(("top", TOP_LABEL))
            .chain(GENERATION_STAGES.into_iter().zip(STAGE_LABELS));
        let mut root = Element::new("div")
            .with_id("generations")
            .with_child(tab_bar(self.router.config(), labels))
            .with_child(self.render_content());
        self.router.project(&mut root);
        root
    }
}
