//! Document parsers
//!
//! Turn a fetched body into a typed document:
//! - JSON content files via serde
//! - Markdown page sections via pulldown-cmark

use crate::error::LoadError;

mod json;
mod markdown;

pub use json::JsonParser;
pub use markdown::{MarkdownParser, MarkdownSection};

/// Parser trait for converting a fetched body into a typed document
pub trait DocumentParser: Send + Sync {
    /// The document type this parser produces
    type Output;

    /// Parse `content` fetched from `path`
    ///
    /// # Errors
    /// `LoadError::Parse` when the body does not match the document shape
    fn parse(&self, path: &str, content: &str) -> Result<Self::Output, LoadError>;
}
