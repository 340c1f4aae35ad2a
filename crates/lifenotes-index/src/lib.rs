//! Topic index and filtering for the life-notes site
//!
//! - [`TopicIndex`]: topics concatenated from the category documents
//! - [`FilterState`]: category, search text and tag of one page
//! - [`FilterEngine`]: applies a state to an index, sampling when unfiltered

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod filter;
pub mod index;

pub use filter::{
    CategoryFilter, FilterEngine, FilterMode, FilterOutcome, FilterState, DEFAULT_DISCOVER_SAMPLE,
};
pub use index::TopicIndex;
