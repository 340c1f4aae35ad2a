//! Single-page navigator
//!
//! Switches between the site's pages and fetches each page's markdown
//! section at most once per session.

use indexmap::IndexMap;
use std::collections::HashSet;

/// Result of navigating to a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Page shown; its section (if any) is already loaded
    Show {
        /// Page id
        page: String,
    },
    /// Page shown; its section must be fetched from `path`
    LoadSection {
        /// Page id
        page: String,
        /// Markdown path
        path: String,
    },
}

/// Page navigator state
#[derive(Debug, Clone)]
pub struct PageNavigator {
    home: String,
    current: String,
    sections: IndexMap<String, String>,
    loaded: HashSet<String>,
}

impl PageNavigator {
    /// Navigator starting on `home`; `sections` maps page id to markdown path
    #[must_use]
    pub fn new(home: impl Into<String>, sections: impl IntoIterator<Item = (String, String)>) -> Self {
        let home = home.into();
        Self {
            current: home.clone(),
            home,
            sections: sections.into_iter().collect(),
            loaded: HashSet::new(),
        }
    }

    /// Page currently shown
    #[inline]
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the section of `page` has been loaded
    #[must_use]
    pub fn is_loaded(&self, page: &str) -> bool {
        self.loaded.contains(page)
    }

    /// Show `page`, requesting its section the first time
    pub fn go(&mut self, page: &str) -> Navigation {
        self.current = page.to_string();
        match self.sections.get(page) {
            Some(path) if !self.loaded.contains(page) => {
                tracing::debug!(page, path = %path, "loading page section");
                Navigation::LoadSection {
                    page: page.to_string(),
                    path: path.clone(),
                }
            }
            _ => Navigation::Show {
                page: page.to_string(),
            },
        }
    }

    /// "Back home" buttons
    pub fn back_home(&mut self) -> Navigation {
        let home = self.home.clone();
        self.go(&home)
    }

    /// Record a section fetch; failures leave the section eligible for retry
    pub fn section_loaded(&mut self, page: &str, ok: bool) {
        if ok {
            self.loaded.insert(page.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> PageNavigator {
        PageNavigator::new(
            "home",
            [("mindset".to_string(), "contents/mindset.md".to_string())],
        )
    }

    #[test]
    fn section_loads_once() {
        let mut nav = navigator();
        assert_eq!(
            nav.go("mindset"),
            Navigation::LoadSection {
                page: "mindset".into(),
                path: "contents/mindset.md".into()
            }
        );
        assert!(!nav.is_loaded("mindset"));
        nav.section_loaded("mindset", true);
        assert!(nav.is_loaded("mindset"));
        assert_eq!(nav.go("mindset"), Navigation::Show { page: "mindset".into() });
    }

    #[test]
    fn failed_section_is_retried() {
        let mut nav = navigator();
        nav.go("mindset");
        nav.section_loaded("mindset", false);
        assert!(matches!(nav.go("mindset"), Navigation::LoadSection { .. }));
    }

    #[test]
    fn back_home_returns_to_start() {
        let mut nav = navigator();
        nav.go("mindset");
        assert_eq!(nav.back_home(), Navigation::Show { page: "home".into() });
        assert_eq!(nav.current(), "home");
    }
}
