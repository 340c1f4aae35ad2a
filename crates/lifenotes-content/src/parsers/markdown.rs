//! Markdown section parser
//!
//! Uses pulldown-cmark to render a page's markdown section to HTML and pick
//! out its title (first H1).

use crate::error::LoadError;
use crate::parsers::DocumentParser;
use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser as MdParser, Tag, TagEnd};

/// Rendered markdown section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSection {
    /// Document title (first H1), if any
    pub title: Option<String>,
    /// Rendered HTML body
    pub html: String,
}

/// Markdown parser
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Create new markdown parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }

    /// Text of the first level-1 heading
    fn extract_title(content: &str) -> Option<String> {
        let mut in_title = false;
        let mut title = String::new();

        for event in MdParser::new_ext(content, Self::options()) {
            match event {
                Event::Start(Tag::Heading {
                    level: HeadingLevel::H1,
                    ..
                }) => in_title = true,
                Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_title => {
                    return Some(title.trim().to_string());
                }
                Event::Text(text) | Event::Code(text) if in_title => title.push_str(&text),
                _ => {}
            }
        }
        None
    }
}

impl DocumentParser for MarkdownParser {
    type Output = MarkdownSection;

    fn parse(&self, _path: &str, content: &str) -> Result<MarkdownSection, LoadError> {
        let mut rendered = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut rendered, MdParser::new_ext(content, Self::options()));

        Ok(MarkdownSection {
            title: Self::extract_title(content),
            html: rendered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_parser_basic() {
        let section = MarkdownParser
            .parse(
                "contents/generation/elementary.md",
                "# 小学生\n\nSome content here.\n\n## Section\n\nMore.\n",
            )
            .unwrap();

        assert_eq!(section.title.as_deref(), Some("小学生"));
        assert!(section.html.contains("<h1>小学生</h1>"));
        assert!(section.html.contains("<h2>Section</h2>"));
    }

    #[test]
    fn markdown_parser_without_h1() {
        let section = MarkdownParser.parse("x.md", "## Only h2\n").unwrap();
        assert!(section.title.is_none());
    }

    #[test]
    fn markdown_parser_empty() {
        let section = MarkdownParser.parse("x.md", "").unwrap();
        assert!(section.title.is_none());
        assert!(section.html.is_empty());
    }

    #[test]
    fn markdown_tables_enabled() {
        let section = MarkdownParser
            .parse("x.md", "| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(section.html.contains("<table>"));
    }
}
