//! View layer for the life-notes site
//!
//! Replaces the host document with an owned element tree:
//!
//! - [`element`]: the tree and its class/style/attribute operations
//! - [`render`]: topic, stage, pattern and job renderers
//! - [`accordion`]: open/closed card state and its projection
//! - [`html`]: HTML (escaped) and text projections
//! - [`messages`]: fixed user-facing strings

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod accordion;
pub mod element;
pub mod html;
pub mod messages;
pub mod render;

pub use accordion::{Accordion, CardParts, CardState, ExpansionMode, Projection};
pub use element::{Element, Node, LINE_HEIGHT};
pub use html::{escape_html, fragment_to_html, fragment_to_text, to_html, to_text};
