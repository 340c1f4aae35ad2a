//! lifenotes pages and front end
//!
//! Composes the content loader, topic index, view renderers, router and
//! trackers into the site's pages:
//!
//! | page            | type                   | content                          |
//! |-----------------|------------------------|----------------------------------|
//! | knowledge notes | [`KnowledgeNotesPage`] | one topic document per tab       |
//! | discover        | [`DiscoverPage`]       | every topic document, filtered   |
//! | generations     | [`GenerationsPage`]    | one stage record per `?stage=`   |
//! | life stories    | [`LifeStoriesPage`]    | six patterns, six jobs           |
//! | user notes      | [`UserNotesPage`]      | six trackers over one store      |
//!
//! [`SiteShell`] carries the header menu and the markdown page sections.
//! [`NotesConfig`] holds every deployment setting.
//!
//! # Example
//!
//! ```rust,ignore
//! use lifenotes_core::{GenerationsPage, NotesConfig};
//!
//! # async fn example() -> lifenotes_core::Result<()> {
//! let config = NotesConfig::new().with_content_root("site");
//! let (mut page, transition) = GenerationsPage::open(
//!     config.loader()?,
//!     &config.paths,
//!     &config.generations_base,
//!     "?stage=high",
//! );
//! page.run(&transition).await;
//! println!("{}", lifenotes_view::to_text(&page.render()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pages;

pub use config::{NotesConfig, DEFAULT_CACHE_CAPACITY};
pub use error::{ConfigError, NotesError, Result};
pub use pages::{
    DiscoverPage, GenerationsPage, IndexState, KnowledgeNotesPage, LifeStoriesPage, SectionState,
    SiteShell, UserNotesPage, HOME_PAGE,
};
