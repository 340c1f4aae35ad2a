//! JSON document parser
//!
//! Uses serde_json; field-level leniency lives in the document types.

use crate::error::LoadError;
use crate::parsers::DocumentParser;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// JSON parser for documents of type `T`
#[derive(Debug, Clone, Copy)]
pub struct JsonParser<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonParser<T> {
    /// Create new JSON parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> DocumentParser for JsonParser<T> {
    type Output = T;

    fn parse(&self, path: &str, content: &str) -> Result<T, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::parse(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StageRecord, TopicDocument};

    #[test]
    fn json_parser_valid() {
        let parser = JsonParser::<TopicDocument>::new();
        let doc = parser
            .parse("data/mind.json", r#"{"topics":[{"title":"A"}]}"#)
            .unwrap();
        assert_eq!(doc.topics[0].title, "A");
    }

    #[test]
    fn json_parser_invalid() {
        let parser = JsonParser::<TopicDocument>::new();
        let err = parser.parse("data/mind.json", r#"{"topics": [}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.path(), "data/mind.json");
    }

    #[test]
    fn json_parser_empty() {
        let parser = JsonParser::<StageRecord>::new();
        assert!(parser.parse("data/high.json", "").is_err());
    }

    #[test]
    fn json_null_document_is_rejected() {
        let parser = JsonParser::<StageRecord>::new();
        assert!(parser.parse("data/high.json", "null").is_err());
    }
}
