//! Life-pattern catalogue cards

use crate::element::Element;
use crate::messages::pattern as label;
use lifenotes_content::PatternRecord;

fn pattern_detail_block(title: &str, items: &[String]) -> Element {
    Element::new("div")
        .with_class("pattern-detail-block")
        .with_child(Element::new("h4").with_class("pattern-detail-title").with_text(title))
        .with_child(
            Element::new("ul")
                .with_class("pattern-detail-list")
                .with_children(items.iter().map(|item| Element::new("li").with_text(item.as_str()))),
        )
}

fn insight_line(prefix: &str, value: &str) -> Option<Element> {
    (!value.is_empty()).then(|| {
        Element::new("p")
            .with_class("pattern-insight-line")
            .with_text(format!("{prefix}{value}"))
    })
}

/// One pattern card: header button, always-visible summary, collapsed details
#[must_use]
pub fn pattern_card(record: &PatternRecord) -> Element {
    let header = Element::new("button")
        .with_class("pattern-card-header")
        .with_attr("type", "button")
        .with_attr("aria-expanded", "false")
        .with_child(
            Element::new("div")
                .with_class("pattern-card-header-main")
                .with_child(
                    Element::new("h3")
                        .with_class("pattern-card-title")
                        .with_text(record.title.as_str()),
                )
                .with_child(
                    Element::new("p")
                        .with_class("pattern-card-route-label")
                        .with_text(record.route_label.as_str()),
                ),
        )
        .with_child(
            Element::new("div")
                .with_class("pattern-card-toggle-icon")
                .with_text(label::TOGGLE_ICON),
        );

    let mut inner = Element::new("div").with_class("pattern-card-details-inner");
    for (title, items) in [
        (label::ESSENCE, &record.essence),
        (label::BRANCHES, &record.branches),
        (label::PAINS, &record.pains),
    ] {
        if !items.is_empty() {
            inner.push(pattern_detail_block(title, items));
        }
    }

    if let Some(insight) = &record.insight {
        inner.push(
            Element::new("div").with_class("pattern-insight").with_children(
                [
                    insight_line(label::ABSTRACT_PREFIX, &insight.abstraction),
                    insight_line(label::TWO_ROUND_PREFIX, &insight.two_round_view),
                    insight_line(label::ACTION_PREFIX, &insight.action_hint),
                ]
                .into_iter()
                .flatten(),
            ),
        );
    }

    if !record.final_line.is_empty() {
        inner.push(
            Element::new("p")
                .with_class("pattern-final-line")
                .with_text(record.final_line.as_str()),
        );
    }

    Element::new("article")
        .with_class("pattern-card")
        .with_child(header)
        .with_child(
            Element::new("div")
                .with_class("pattern-card-summary")
                .with_text(record.overview.as_str()),
        )
        .with_child(
            Element::new("div")
                .with_class("pattern-card-details-wrapper")
                .with_style("max-height", "0px")
                .with_child(inner),
        )
}

/// Cards for every loaded pattern, in file order
#[must_use]
pub fn pattern_cards(records: &[PatternRecord]) -> Vec<Element> {
    records.iter().map(pattern_card).collect()
}
