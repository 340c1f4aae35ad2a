//! Accordion state
//!
//! Open/closed state of a list of expandable cards lives here; the view only
//! receives [`Projection`]s. A card expands to the natural height of its
//! detail region measured at toggle time and collapses back to zero.

use crate::element::Element;
use crate::messages::class;
use serde::{Deserialize, Serialize};

/// Whether several cards may be open at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    /// Opening one card closes the others
    Single,
    /// Cards open and close independently
    #[default]
    Multiple,
}

/// State of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Detail region at zero height
    #[default]
    Collapsed,
    /// Detail region at its measured height
    Expanded {
        /// Natural height at expansion time, in pixels
        height: u32,
    },
}

impl CardState {
    /// Whether the card is open
    #[inline]
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, CardState::Expanded { .. })
    }

    /// Current `max-height` in pixels
    #[inline]
    #[must_use]
    pub fn max_height(self) -> u32 {
        match self {
            CardState::Collapsed => 0,
            CardState::Expanded { height } => height,
        }
    }
}

/// State change of one card, to be applied to its view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Card position in the list
    pub index: usize,
    /// New state
    pub state: CardState,
}

/// Where a card keeps its expandable parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardParts {
    /// Class of the region whose `max-height` animates
    pub region: &'static str,
    /// Class of the region's content, measured for the natural height
    pub inner: &'static str,
    /// Class of the element carrying `aria-expanded`; the card itself when
    /// `None`
    pub trigger: Option<&'static str>,
}

impl CardParts {
    /// Knowledge-notes topic card
    pub const TOPIC: CardParts = CardParts {
        region: "shosei-detail",
        inner: "shosei-detail-inner",
        trigger: None,
    };

    /// Life-pattern card
    pub const PATTERN: CardParts = CardParts {
        region: "pattern-card-details-wrapper",
        inner: "pattern-card-details-inner",
        trigger: Some("pattern-card-header"),
    };

    /// Natural height of the card's detail content
    #[must_use]
    pub fn measure(&self, card: &Element) -> u32 {
        card.find_by_class(self.inner)
            .or_else(|| card.find_by_class(self.region))
            .map_or(0, Element::natural_height)
    }
}

impl Projection {
    /// Apply to a card view: `is-open` class, `max-height` style and
    /// `aria-expanded`
    pub fn apply(&self, card: &mut Element, parts: CardParts) {
        let open = self.state.is_open();
        card.toggle_class(class::IS_OPEN, open);

        if let Some(region) = card.find_by_class_mut(parts.region) {
            region.set_style("max-height", format!("{}px", self.state.max_height()));
        }

        let trigger = match parts.trigger {
            Some(trigger) => card.find_by_class_mut(trigger),
            None => Some(card),
        };
        if let Some(trigger) = trigger {
            trigger.set_attr("aria-expanded", open.to_string());
        }
    }
}

/// Open/closed state of a card list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    mode: ExpansionMode,
    cards: Vec<CardState>,
}

impl Accordion {
    /// Create accordion of `count` collapsed cards
    #[must_use]
    pub fn new(mode: ExpansionMode, count: usize) -> Self {
        Self {
            mode,
            cards: vec![CardState::Collapsed; count],
        }
    }

    /// Expansion mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// Number of cards
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether there are no cards
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// State of card `index`
    #[must_use]
    pub fn state(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).copied()
    }

    /// Whether card `index` is open
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.state(index).is_some_and(CardState::is_open)
    }

    /// Indices of open cards
    #[must_use]
    pub fn open_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    /// Click on card `index`; `natural_height` is its detail height now
    ///
    /// Returns the projections to apply; an out-of-range index changes
    /// nothing.
    pub fn toggle(&mut self, index: usize, natural_height: u32) -> Vec<Projection> {
        match self.state(index) {
            Some(CardState::Expanded { .. }) => self.close(index),
            Some(CardState::Collapsed) => self.open(index, natural_height),
            None => Vec::new(),
        }
    }

    /// Open card `index`, closing the others in single mode
    pub fn open(&mut self, index: usize, natural_height: u32) -> Vec<Projection> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        let mut projections = Vec::new();
        if self.mode == ExpansionMode::Single {
            for other in self.open_indices() {
                if other != index {
                    projections.extend(self.close(other));
                }
            }
        }
        let state = CardState::Expanded {
            height: natural_height,
        };
        self.cards[index] = state;
        tracing::debug!(index, height = natural_height, "card expanded");
        projections.push(Projection { index, state });
        projections
    }

    /// Close card `index`
    pub fn close(&mut self, index: usize) -> Vec<Projection> {
        match self.cards.get_mut(index) {
            Some(state) => {
                *state = CardState::Collapsed;
                vec![Projection {
                    index,
                    state: CardState::Collapsed,
                }]
            }
            None => Vec::new(),
        }
    }

    /// Toggle card `index` of `cards`, measuring and projecting in place
    pub fn toggle_card(&mut self, cards: &mut [Element], index: usize, parts: CardParts) {
        let Some(card) = cards.get(index) else {
            return;
        };
        let height = parts.measure(card);
        for projection in self.toggle(index, height) {
            if let Some(card) = cards.get_mut(projection.index) {
                projection.apply(card, parts);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_card() -> Element {
        Element::new("article").with_class("shosei-card").with_child(
            Element::new("div")
                .with_class("shosei-detail")
                .with_style("max-height", "0px")
                .with_child(
                    Element::new("div")
                        .with_class("shosei-detail-inner")
                        .with_child(Element::new("p").with_text("one"))
                        .with_child(Element::new("p").with_text("two")),
                ),
        )
    }

    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let mut accordion = Accordion::new(ExpansionMode::Multiple, 1);
        let mut cards = vec![topic_card()];

        for _ in 0..2 {
            accordion.toggle_card(&mut cards, 0, CardParts::TOPIC);
            assert!(cards[0].has_class("is-open"));
            accordion.toggle_card(&mut cards, 0, CardParts::TOPIC);
        }

        let region = cards[0].find_by_class("shosei-detail").unwrap();
        assert_eq!(region.style("max-height"), Some("0px"));
        assert!(!cards[0].has_class("is-open"));
        assert_eq!(cards[0].attr("aria-expanded"), Some("false"));
    }

    #[test]
    fn expansion_uses_measured_height() {
        let mut accordion = Accordion::new(ExpansionMode::Multiple, 1);
        let mut cards = vec![topic_card()];
        accordion.toggle_card(&mut cards, 0, CardParts::TOPIC);

        let region = cards[0].find_by_class("shosei-detail").unwrap();
        assert_eq!(region.style("max-height"), Some("48px"));
        assert_eq!(accordion.state(0), Some(CardState::Expanded { height: 48 }));
    }

    #[test]
    fn single_mode_closes_others() {
        let mut accordion = Accordion::new(ExpansionMode::Single, 3);
        accordion.toggle(0, 10);
        let projections = accordion.toggle(2, 20);

        assert_eq!(accordion.open_indices(), vec![2]);
        assert_eq!(
            projections,
            vec![
                Projection {
                    index: 0,
                    state: CardState::Collapsed
                },
                Projection {
                    index: 2,
                    state: CardState::Expanded { height: 20 }
                },
            ]
        );
    }

    #[test]
    fn multiple_mode_keeps_others_open() {
        let mut accordion = Accordion::new(ExpansionMode::Multiple, 3);
        accordion.toggle(0, 10);
        accordion.toggle(1, 10);
        assert_eq!(accordion.open_indices(), vec![0, 1]);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(ExpansionMode::Single, 1);
        assert!(accordion.toggle(5, 10).is_empty());
        assert!(accordion.open_indices().is_empty());
    }

    #[test]
    fn expansion_mode_from_config_string() {
        #[derive(Deserialize)]
        struct Holder {
            mode: ExpansionMode,
        }
        let holder: Holder = serde_json::from_str(r#"{"mode":"single"}"#).unwrap();
        assert_eq!(holder.mode, ExpansionMode::Single);
    }
}
