//! Personal trackers of the user-notes page
//!
//! Each tracker keeps an ordered list of entries as a JSON array under its
//! own key in a [`KeyValueStore`]:
//!
//! | tracker | key                   | entry           |
//! |---------|-----------------------|-----------------|
//! | quotes  | `jn_user_quotes_v2`   | [`Quote`]       |
//! | chat    | `jn_user_chat_log_v1` | [`ChatMessage`] |
//! | items   | `jn_user_items_v1`    | [`Item`]        |
//! | skills  | `jn_user_skills_v1`   | [`Skill`]       |
//! | money   | `jn_user_money_v1`    | [`MoneyTip`]    |
//! | network | `jn_user_network_v1`  | [`Contact`]     |
//!
//! # Example
//!
//! ```
//! use lifenotes_tracker::{EntryInput, MemoryStore, Quote, Tracker};
//!
//! let mut quotes: Tracker<Quote, _> = Tracker::open(MemoryStore::new());
//! assert!(quotes.add(&EntryInput::new("Slow is smooth")).unwrap());
//! assert!(!quotes.add(&EntryInput::new("   ")).unwrap());
//! assert_eq!(quotes.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod chat;
pub mod date;
pub mod entry;
pub mod error;
pub mod store;
pub mod tracker;

pub use chat::{ChatSession, DEFAULT_REPLY_DELAY, DEMO_REPLIES};
pub use date::format_date;
pub use entry::{
    Categorized, ChatMessage, ChatRole, Contact, ContactType, EntryInput, Item, ItemType,
    KeyPress, MoneyTip, MoneyType, Quote, Skill, TrackerEntry, TrackerKind, UnknownTracker,
};
pub use error::{Result, StoreError, StoreResult, TrackerError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::Tracker;
