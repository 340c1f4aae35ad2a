//! Knowledge-notes topic cards

use crate::element::Element;
use crate::messages::{self, topic as label};
use lifenotes_content::Topic;

/// Labelled bullet block of a detail region
#[must_use]
pub fn detail_block(title: &str, items: &[String]) -> Element {
    Element::new("div")
        .with_class("detail-block")
        .with_child(Element::new("h4").with_class("detail-title").with_text(title))
        .with_child(
            Element::new("ul")
                .with_class("detail-list")
                .with_children(items.iter().map(|item| Element::new("li").with_text(item.as_str()))),
        )
}

/// One topic card: title, summary, tag chips and a collapsed detail region
///
/// Detail blocks appear only for non-empty lists.
#[must_use]
pub fn topic_card(topic: &Topic) -> Element {
    let title = if topic.title.is_empty() {
        messages::UNTITLED
    } else {
        topic.title.as_str()
    };

    let blocks = [
        (label::ESSENCE, &topic.essence),
        (label::TRAPS, &topic.traps),
        (label::ACTION_TIPS, &topic.action_tips),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| detail_block(title, items));

    Element::new("article")
        .with_class("shosei-card")
        .with_attr("aria-expanded", "false")
        .with_child(Element::new("h3").with_class("shosei-title").with_text(title))
        .with_child(
            Element::new("p")
                .with_class("shosei-summary")
                .with_text(topic.summary.as_str()),
        )
        .with_child(
            Element::new("div").with_class("shosei-tags").with_children(
                topic
                    .tags
                    .iter()
                    .map(|tag| Element::new("span").with_class("tag-chip").with_text(tag.as_str())),
            ),
        )
        .with_child(
            Element::new("div")
                .with_class("shosei-detail")
                .with_style("max-height", "0px")
                .with_child(
                    Element::new("div")
                        .with_class("shosei-detail-inner")
                        .with_children(blocks),
                ),
        )
}

/// Fixed "no results" paragraph
#[must_use]
pub fn no_results() -> Element {
    Element::new("p")
        .with_class("no-results")
        .with_text(messages::NO_RESULTS)
}

/// Cards for a filter result, or the "no results" paragraph when empty
#[must_use]
pub fn topic_cards<'a>(topics: impl IntoIterator<Item = &'a Topic>) -> Vec<Element> {
    let cards: Vec<Element> = topics.into_iter().map(topic_card).collect();
    if cards.is_empty() {
        vec![no_results()]
    } else {
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_uses_fallback() {
        let card = topic_card(&Topic::default());
        let title = card.find_by_class("shosei-title").unwrap();
        assert_eq!(title.text_content(), messages::UNTITLED);
        assert_eq!(card.find_by_class("shosei-summary").unwrap().text_content(), "");
    }

    #[test]
    fn detail_blocks_only_for_non_empty_lists() {
        let topic = Topic {
            title: "t".into(),
            traps: vec!["rushing".into()],
            ..Topic::default()
        };
        let card = topic_card(&topic);
        let blocks = card.find_all_by_class("detail-block");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].find_by_class("detail-title").unwrap().text_content(),
            label::TRAPS
        );
    }

    #[test]
    fn detail_region_starts_collapsed() {
        let card = topic_card(&Topic::default());
        let region = card.find_by_class("shosei-detail").unwrap();
        assert_eq!(region.style("max-height"), Some("0px"));
        assert!(!card.has_class("is-open"));
    }

    #[test]
    fn empty_result_shows_message() {
        let cards = topic_cards(std::iter::empty());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].text_content(), messages::NO_RESULTS);
    }

    #[test]
    fn tag_chips_follow_tags() {
        let topic = Topic {
            tags: vec!["a".into(), "b".into()],
            ..Topic::default()
        };
        let card = topic_card(&topic);
        assert_eq!(card.find_all_by_class("tag-chip").len(), 2);
    }
}
