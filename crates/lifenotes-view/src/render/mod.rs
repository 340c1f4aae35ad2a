//! Renderers: content records to view fragments
//!
//! Every renderer is a pure function of its record. Open/active state is
//! applied afterwards as a projection.

mod job;
mod notice;
mod pattern;
mod stage;
mod tags;
mod topic;

pub use job::{job_card, job_tag_buttons};
pub use notice::{error_card, error_message, loading};
pub use pattern::{pattern_card, pattern_cards};
pub use stage::{stage_view, top_view};
pub use tags::{project_active_tag, tag_buttons};
pub use topic::{detail_block, no_results, topic_card, topic_cards};
