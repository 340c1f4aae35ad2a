//! Site shell: header menu overlay and the page navigator

use lifenotes_content::{ContentLoader, ContentPaths, MarkdownSection};
use lifenotes_router::{MenuOverlay, Navigation, PageNavigator};
use lifenotes_view::{messages, render::error_message, Element};
use std::collections::HashMap;

/// Page shown on start and by "back home"
pub const HOME_PAGE: &str = "home";

/// Menu overlay plus page navigation with lazily loaded markdown sections
#[derive(Debug)]
pub struct SiteShell {
    loader: ContentLoader,
    menu: MenuOverlay,
    navigator: PageNavigator,
    sections: HashMap<String, MarkdownSection>,
    failed: Option<String>,
}

impl SiteShell {
    /// Shell on the home page; sections come from `paths.sections`
    #[must_use]
    pub fn new(loader: ContentLoader, paths: &ContentPaths) -> Self {
        let sections = paths
            .sections
            .iter()
            .map(|(page, path)| (page.clone(), path.clone()));
        Self {
            loader,
            menu: MenuOverlay::new(),
            navigator: PageNavigator::new(HOME_PAGE, sections),
            sections: HashMap::new(),
            failed: None,
        }
    }

    /// Menu state
    #[must_use]
    pub fn menu(&self) -> &MenuOverlay {
        &self.menu
    }

    /// Menu button
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Click inside the open overlay
    pub fn click_overlay(&mut self, on_backdrop: bool) {
        self.menu.click(on_backdrop);
    }

    /// Page currently shown
    #[must_use]
    pub fn current(&self) -> &str {
        self.navigator.current()
    }

    /// Loaded section of `page`
    #[must_use]
    pub fn section(&self, page: &str) -> Option<&MarkdownSection> {
        self.sections.get(page)
    }

    /// Navigate to `page`, closing the menu and loading its section once
    pub async fn go(&mut self, page: &str) -> Navigation {
        self.menu.close();
        let navigation = self.navigator.go(page);
        self.resolve(&navigation).await;
        navigation
    }

    /// Navigate back to the home page
    pub async fn back_home(&mut self) -> Navigation {
        self.menu.close();
        let navigation = self.navigator.back_home();
        self.resolve(&navigation).await;
        navigation
    }

    async fn resolve(&mut self, navigation: &Navigation) {
        self.failed = None;
        let Navigation::LoadSection { page, path } = navigation else {
            return;
        };
        match self.loader.load_markdown(path).await {
            Ok(section) => {
                tracing::info!(page = %page, "page section loaded");
                self.sections.insert(page.clone(), section);
                self.navigator.section_loaded(page, true);
            }
            Err(error) => {
                tracing::error!(page = %page, path = error.path(), %error, "page section failed to load");
                self.navigator.section_loaded(page, false);
                self.failed = Some(page.clone());
            }
        }
    }

    /// Header with the menu projection and the current page's title
    #[must_use]
    pub fn render(&self) -> Element {
        let mut toggle = Element::new("button")
            .with_id("menu-toggle")
            .with_attr("type", "button")
            .with_text("MENU");
        let mut overlay = Element::new("div").with_id("menu-overlay").with_class("menu-overlay");
        self.menu.project(&mut overlay, Some(&mut toggle));

        let page = self.current();
        let mut body = Element::new("main").with_id(format!("page-{page}")).with_class("page");
        if self.failed.as_deref() == Some(page) {
            body.push(error_message("section-error-message", messages::LOAD_ERROR));
        } else if let Some(title) = self.section(page).and_then(|s| s.title.as_deref()) {
            body.push(Element::new("h1").with_class("page-title").with_text(title));
        }

        Element::new("div")
            .with_id("site")
            .with_child(Element::new("header").with_class("site-header").with_child(toggle))
            .with_child(overlay)
            .with_child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifenotes_test_utils::{loader_with, StaticSource};

    fn shell(source: StaticSource) -> (SiteShell, std::sync::Arc<StaticSource>) {
        let (loader, source) = loader_with(source);
        let mut paths = ContentPaths::default();
        paths
            .sections
            .insert("mindset".to_string(), "contents/mindset.md".to_string());
        (SiteShell::new(loader, &paths), source)
    }

    #[tokio::test]
    async fn section_is_fetched_once() {
        let (mut shell, source) = shell(StaticSource::new().with("contents/mindset.md", "# Mindset\n\nbody"));
        shell.toggle_menu();
        shell.click_overlay(false);
        assert!(shell.menu().is_open());
        assert!(matches!(shell.go("mindset").await, Navigation::LoadSection { .. }));
        assert!(!shell.menu().is_open());

        shell.back_home().await;
        assert!(matches!(shell.go("mindset").await, Navigation::Show { .. }));
        assert_eq!(source.fetch_count("contents/mindset.md"), 1);

        let view = shell.render();
        assert_eq!(view.find_by_class("page-title").unwrap().text_content(), "Mindset");
        assert_eq!(view.find_by_id("menu-overlay").unwrap().attr("aria-hidden"), Some("true"));
    }

    #[tokio::test]
    async fn missing_section_shows_error_and_retries() {
        let (mut shell, source) = shell(StaticSource::new());
        shell.go("mindset").await;
        assert!(shell.render().text_content().contains(messages::LOAD_ERROR));
        assert!(matches!(shell.go("mindset").await, Navigation::LoadSection { .. }));
        assert_eq!(source.fetch_count("contents/mindset.md"), 2);
    }
}
