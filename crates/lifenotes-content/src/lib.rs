//! lifenotes content layer
//!
//! The boundary between the static content files and the rest of the site
//! logic.
//!
//! # Core Operations
//!
//! - **Fetch**: read a document through a [`ContentSource`] (directory or HTTP)
//! - **Decode**: parse JSON into typed records, normalizing missing fields
//! - **Cache**: keep decoded documents for the session ([`DocumentCache`])
//!
//! # Architecture
//!
//! ```text
//! ContentSource → size check → DocumentParser → typed record
//!                      ↑_______________↓
//!                        DocumentCache (path + type)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use lifenotes_content::{ContentLoader, ContentPaths, DirectorySource, StageRecord};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), lifenotes_content::LoadError> {
//! let loader = ContentLoader::new(Arc::new(DirectorySource::new("site")));
//! let stage: StageRecord = loader
//!     .load(&ContentPaths::default().stage_path("university"))
//!     .await?;
//! println!("{}", stage.title);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;
pub mod error;
pub mod lenient;
pub mod loader;
pub mod model;
pub mod parsers;
pub mod paths;
pub mod source;

pub use cache::{CacheStats, DocumentCache, TypedCacheKey};
pub use error::{LoadError, LoadResult};
pub use loader::{ContentLoader, DEFAULT_MAX_DOCUMENT_SIZE};
pub use model::{
    Category, Choice, CommonPath, Insight, JobRecord, PatternInsight, PatternRecord, StageRecord,
    Topic, TopicDocument, UnknownCategory,
};
pub use parsers::MarkdownSection;
pub use paths::ContentPaths;
pub use source::{ContentSource, DirectorySource, HttpSource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
