//! Error cards and placeholders

use crate::element::Element;
use crate::messages;

/// Card standing in for content that failed to load
#[must_use]
pub fn error_card(message: &str) -> Element {
    Element::new("div")
        .with_class("gen-card error-card")
        .with_attr("role", "alert")
        .with_child(Element::new("p").with_class("error-message").with_text(message))
}

/// Placeholder while a fetch is pending
#[must_use]
pub fn loading() -> Element {
    Element::new("p")
        .with_class("loading")
        .with_text(messages::LOADING)
}

/// Inline error paragraph (category, pattern and job containers)
#[must_use]
pub fn error_message(class: &str, message: &str) -> Element {
    Element::new("p").with_class(class).with_text(message)
}
