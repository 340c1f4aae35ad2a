//! HTML and text projection of the view tree

use crate::element::{Element, Node};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Escape `& < > " '` for safe insertion into markup
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render an element as HTML; all text and attribute values are escaped
#[must_use]
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_html(element, &mut out);
    out
}

/// Render several sibling elements as HTML
#[must_use]
pub fn fragment_to_html(elements: &[Element]) -> String {
    elements.iter().map(to_html).collect()
}

/// Elements written without children or a closing tag
const VOID_ELEMENTS: [&str; 5] = ["br", "hr", "img", "input", "meta"];

fn write_html(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    if let Some(id) = element.id() {
        let _ = write!(out, r#" id="{}""#, escape_html(id));
    }
    if !element.classes().is_empty() {
        let _ = write!(out, r#" class="{}""#, escape_html(&element.classes().join(" ")));
    }
    for (name, value) in element.attrs() {
        let _ = write!(out, r#" {}="{}""#, name, escape_html(value));
    }
    if !element.styles().is_empty() {
        let style = element
            .styles()
            .iter()
            .map(|(property, value)| format!("{property}:{value}"))
            .collect::<Vec<_>>()
            .join(";");
        let _ = write!(out, r#" style="{}""#, escape_html(&style));
    }
    if element.is_hidden() {
        out.push_str(" hidden");
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    for child in element.children() {
        match child {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(e) => write_html(e, out),
        }
    }

    let _ = write!(out, "</{}>", element.tag());
}

/// Render an element as an indented text outline
///
/// Hidden elements and collapsed regions (`max-height` of zero) are left
/// out, so the outline shows what a reader would see.
#[must_use]
pub fn to_text(element: &Element) -> String {
    let mut out = String::new();
    write_text(element, 0, &mut out);
    out
}

/// Text outline of several sibling elements
#[must_use]
pub fn fragment_to_text(elements: &[Element]) -> String {
    elements.iter().map(to_text).collect()
}

fn is_collapsed(element: &Element) -> bool {
    element.is_hidden() || matches!(element.style("max-height"), Some("0" | "0px"))
}

fn write_text(element: &Element, depth: usize, out: &mut String) {
    if is_collapsed(element) {
        return;
    }
    let own = element.own_text();
    let own = own.trim();
    let child_depth = if own.is_empty() {
        depth
    } else {
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), own);
        depth + 1
    };
    for child in element.child_elements() {
        write_text(child, child_depth, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let input = Element::new("input")
            .with_class("search-input")
            .with_attr("value", "a&b");
        assert_eq!(
            to_html(&input),
            r#"<input class="search-input" value="a&amp;b">"#
        );
    }

    #[test]
    fn html_projection_orders_attributes() {
        let el = Element::new("button")
            .with_id("b1")
            .with_class("tag-button is-active")
            .with_attr("type", "button")
            .with_style("max-height", "0px")
            .with_text("<calm>");
        assert_eq!(
            to_html(&el),
            r#"<button id="b1" class="tag-button is-active" type="button" style="max-height:0px">&lt;calm&gt;</button>"#
        );
    }

    #[test]
    fn hidden_renders_attribute() {
        let mut el = Element::new("section").with_id("tab-mind");
        el.set_hidden(true);
        assert_eq!(to_html(&el), r#"<section id="tab-mind" hidden></section>"#);
    }

    #[test]
    fn text_outline_skips_collapsed_regions() {
        let el = Element::new("article")
            .with_child(Element::new("h3").with_text("Title"))
            .with_child(
                Element::new("div")
                    .with_style("max-height", "0")
                    .with_child(Element::new("p").with_text("secret")),
            )
            .with_child(
                Element::new("ul")
                    .with_child(Element::new("li").with_text("one"))
                    .with_child(Element::new("li").with_text("two")),
            );
        assert_eq!(to_text(&el), "Title\none\ntwo\n");
    }

    #[test]
    fn text_outline_indents_under_labels() {
        let el = Element::new("div")
            .with_text("Label")
            .with_child(Element::new("p").with_text("child"));
        assert_eq!(to_text(&el), "Label\n  child\n");
    }
}
