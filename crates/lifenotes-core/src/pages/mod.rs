//! The site's pages, each an explicit state object over the shared
//! components

mod discover;
mod generations;
mod knowledge;
mod shell;
mod stories;
mod user_notes;

pub use discover::{DiscoverPage, IndexState};
pub use generations::GenerationsPage;
pub use knowledge::KnowledgeNotesPage;
pub use shell::{SiteShell, HOME_PAGE};
pub use stories::{LifeStoriesPage, SectionState};
pub use user_notes::UserNotesPage;
