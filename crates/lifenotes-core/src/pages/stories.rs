//! Life-stories page: the pattern catalogue and the job directory
//!
//! Both sections load their numbered files as one batch. A single missing
//! file fails the whole section, which then shows its own error line.

use lifenotes_content::{ContentLoader, ContentPaths, JobRecord, PatternRecord};
use lifenotes_view::render::{error_message, job_card, job_tag_buttons, loading, pattern_cards};
use lifenotes_view::{messages, Accordion, CardParts, Element, ExpansionMode};

/// Load state of one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState<T> {
    /// Not requested yet
    Empty,
    /// Records in file order
    Ready(Vec<T>),
    /// The batch failed
    Failed,
}

impl<T> SectionState<T> {
    fn records(&self) -> &[T] {
        match self {
            Self::Ready(records) => records,
            Self::Empty | Self::Failed => &[],
        }
    }
}

/// Life-stories page state
#[derive(Debug)]
pub struct LifeStoriesPage {
    loader: ContentLoader,
    paths: ContentPaths,
    patterns: SectionState<PatternRecord>,
    pattern_cards: Vec<Element>,
    accordion: Accordion,
    expansion: ExpansionMode,
    jobs: SectionState<JobRecord>,
    active_job: Option<String>,
}

impl LifeStoriesPage {
    /// Page with nothing loaded
    #[must_use]
    pub fn new(loader: ContentLoader, paths: ContentPaths, expansion: ExpansionMode) -> Self {
        Self {
            loader,
            paths,
            patterns: SectionState::Empty,
            pattern_cards: Vec::new(),
            accordion: Accordion::new(expansion, 0),
            expansion,
            jobs: SectionState::Empty,
            active_job: None,
        }
    }

    /// Load both sections concurrently
    pub async fn load(&mut self) {
        let pattern_paths = self.paths.pattern_paths();
        let job_paths = self.paths.job_paths();
        let (patterns, jobs) = tokio::join!(
            self.loader.load_all::<PatternRecord>(&pattern_paths),
            self.loader.load_all::<JobRecord>(&job_paths),
        );

        match patterns {
            Ok(records) => {
                tracing::info!(patterns = records.len(), "life patterns ready");
                self.accordion = Accordion::new(self.expansion, records.len());
                self.pattern_cards = pattern_cards(&records);
                self.patterns = SectionState::Ready(records);
            }
            Err(error) => {
                tracing::error!(path = error.path(), %error, "life patterns failed to load");
                self.patterns = SectionState::Failed;
            }
        }

        match jobs {
            Ok(records) => {
                tracing::info!(jobs = records.len(), "job directory ready");
                self.active_job = records.first().map(|job| job.id.clone());
                self.jobs = SectionState::Ready(records);
            }
            Err(error) => {
                tracing::error!(path = error.path(), %error, "job directory failed to load");
                self.jobs = SectionState::Failed;
            }
        }
    }

    /// Pattern section state
    #[must_use]
    pub fn patterns(&self) -> &SectionState<PatternRecord> {
        &self.patterns
    }

    /// Job section state
    #[must_use]
    pub fn jobs(&self) -> &SectionState<JobRecord> {
        &self.jobs
    }

    /// Open/closed state of the pattern cards
    #[must_use]
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    /// Pattern card header click
    pub fn toggle_pattern(&mut self, index: usize) {
        self.accordion
            .toggle_card(&mut self.pattern_cards, index, CardParts::PATTERN);
    }

    /// Id of the job whose card is shown
    #[must_use]
    pub fn active_job(&self) -> Option<&str> {
        self.active_job.as_deref()
    }

    /// Job tag click; unknown ids are ignored
    pub fn select_job(&mut self, id: &str) -> bool {
        if !self.jobs.records().iter().any(|job| job.id == id) {
            tracing::warn!(job = id, "unknown job id ignored");
            return false;
        }
        self.active_job = Some(id.to_string());
        true
    }

    /// Pattern card grid
    #[must_use]
    pub fn render_patterns(&self) -> Element {
        let grid = Element::new("div").with_id("pattern-card-grid");
        match &self.patterns {
            SectionState::Empty => grid.with_child(loading()),
            SectionState::Ready(_) => grid.with_children(self.pattern_cards.iter().cloned()),
            SectionState::Failed => grid.with_child(error_message(
                "pattern-error-message",
                messages::PATTERN_LOAD_ERROR,
            )),
        }
    }

    /// Job tag row and the active job card
    #[must_use]
    pub fn render_jobs(&self) -> Vec<Element> {
        let mut tags = Element::new("div").with_id("job-tag-container");
        let mut detail = Element::new("div").with_id("job-detail-container");
        match &self.jobs {
            SectionState::Empty => detail.push(loading()),
            SectionState::Ready(jobs) => {
                tags.replace_children(job_tag_buttons(jobs, self.active_job()));
                if let Some(job) = jobs.iter().find(|job| Some(job.id.as_str()) == self.active_job()) {
                    detail.push(job_card(job));
                }
            }
            SectionState::Failed => {
                detail.push(error_message("job-error-message", messages::JOB_LOAD_ERROR));
            }
        }
        vec![tags, detail]
    }

    /// Whole page
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("div")
            .with_id("life-stories")
            .with_child(self.render_patterns())
            .with_children(self.render_jobs())
    }
}
