//! User-notes page: the six personal trackers over one store

use crate::error::Result;
use lifenotes_tracker::{
    Categorized, ChatMessage, ChatSession, Contact, EntryInput, Item, KeyValueStore, MoneyTip,
    Quote, Skill, Tracker, TrackerKind,
};
use lifenotes_view::Element;
use std::time::Duration;

fn heading(kind: TrackerKind) -> &'static str {
    match kind {
        TrackerKind::Quotes => "名言ストック",
        TrackerKind::Chat => "お悩み相談チャット",
        TrackerKind::Items => "アイテムボックス",
        TrackerKind::Skills => "スキルコレクション",
        TrackerKind::Money => "マネーメモ",
        TrackerKind::Network => "人脈マップ",
    }
}

/// Count badges for a categorized tracker, filled by `project_counts`
fn count_row<E: Categorized>() -> Element {
    Element::new("div").with_class("tracker-counts").with_children(E::KINDS.iter().map(|kind| {
        Element::new("span")
            .with_class("tracker-count")
            .with_attr("data-type", *kind)
            .with_child(Element::new("span").with_id(format!("{kind}Count")).with_text("0"))
    }))
}

/// All trackers of the page, sharing one store
#[derive(Debug)]
pub struct UserNotesPage<S> {
    quotes: Tracker<Quote, S>,
    chat: ChatSession<S>,
    items: Tracker<Item, S>,
    skills: Tracker<Skill, S>,
    money: Tracker<MoneyTip, S>,
    network: Tracker<Contact, S>,
}

impl<S: KeyValueStore + Clone> UserNotesPage<S> {
    /// Open every tracker over `store`
    pub fn open(store: S, reply_delay: Duration) -> Self {
        Self {
            quotes: Tracker::open(store.clone()),
            chat: ChatSession::open(store.clone()).with_delay(reply_delay),
            items: Tracker::open(store.clone()),
            skills: Tracker::open(store.clone()),
            money: Tracker::open(store.clone()),
            network: Tracker::open(store),
        }
    }

    /// Seed chat reply selection
    #[must_use]
    pub fn with_chat_seed(mut self, seed: u64) -> Self {
        self.chat = self.chat.with_seed(seed);
        self
    }

    /// Number of entries of `kind`
    #[must_use]
    pub fn len(&self, kind: TrackerKind) -> usize {
        match kind {
            TrackerKind::Quotes => self.quotes.len(),
            TrackerKind::Chat => self.chat.log().len(),
            TrackerKind::Items => self.items.len(),
            TrackerKind::Skills => self.skills.len(),
            TrackerKind::Money => self.money.len(),
            TrackerKind::Network => self.network.len(),
        }
    }

    /// Stored chat conversation
    #[must_use]
    pub fn chat_log(&self) -> &[ChatMessage] {
        self.chat.log().entries()
    }

    /// Submit `input` to the tracker of `kind`
    ///
    /// A chat submission waits for the reply. Returns `false` when the
    /// input was blank.
    ///
    /// # Errors
    ///
    /// A store write failure.
    pub async fn submit(&mut self, kind: TrackerKind, input: &EntryInput) -> Result<bool> {
        let added = match kind {
            TrackerKind::Quotes => self.quotes.add(input)?,
            TrackerKind::Chat => {
                let before = self.chat.log().len();
                self.chat.send(&input.text).await?;
                self.chat.log().len() > before
            }
            TrackerKind::Items => self.items.add(input)?,
            TrackerKind::Skills => self.skills.add(input)?,
            TrackerKind::Money => self.money.add(input)?,
            TrackerKind::Network => self.network.add(input)?,
        };
        if !added {
            tracing::debug!(tracker = %kind, "blank input ignored");
        }
        Ok(added)
    }

    /// Delete entry `index` of `kind`; the chat log has no delete control
    ///
    /// # Errors
    ///
    /// A store write failure.
    pub fn delete(&mut self, kind: TrackerKind, index: usize) -> Result<bool> {
        let deleted = match kind {
            TrackerKind::Quotes => self.quotes.delete(index)?,
            TrackerKind::Chat => false,
            TrackerKind::Items => self.items.delete(index)?,
            TrackerKind::Skills => self.skills.delete(index)?,
            TrackerKind::Money => self.money.delete(index)?,
            TrackerKind::Network => self.network.delete(index)?,
        };
        Ok(deleted)
    }

    /// Section of one tracker
    #[must_use]
    pub fn render_kind(&self, kind: TrackerKind) -> Element {
        let section = Element::new("section")
            .with_id(format!("tracker-{kind}"))
            .with_class("tracker-section")
            .with_child(Element::new("h2").with_class("tracker-title").with_text(heading(kind)));

        match kind {
            TrackerKind::Quotes => section.with_child(self.quotes.render()),
            TrackerKind::Chat => section.with_child(self.chat.log().render()),
            TrackerKind::Items => section.with_child(self.items.render()),
            TrackerKind::Skills => section.with_child(self.skills.render()),
            TrackerKind::Money => {
                let mut section = section
                    .with_child(count_row::<MoneyTip>())
                    .with_child(self.money.render());
                self.money.project_counts(&mut section);
                section
            }
            TrackerKind::Network => {
                let mut section = section
                    .with_child(count_row::<Contact>())
                    .with_child(self.network.render());
                self.network.project_counts(&mut section);
                section
            }
        }
    }

    /// Whole page
    #[must_use]
    pub fn render(&self) -> Element {
        Element::new("div")
            .with_id("user-notes")
            .with_children(TrackerKind::ALL.into_iter().map(|kind| self.render_kind(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifenotes_tracker::{FileStore, MemoryStore};
    use std::sync::Arc;

    fn page() -> UserNotesPage<Arc<MemoryStore>> {
        UserNotesPage::open(Arc::new(MemoryStore::new()), Duration::ZERO).with_chat_seed(1)
    }

    #[tokio::test]
    async fn trackers_keep_separate_keys() {
        let store = Arc::new(MemoryStore::new());
        let mut page = UserNotesPage::open(store.clone(), Duration::ZERO);
        assert!(page.submit(TrackerKind::Quotes, &EntryInput::new("one")).await.unwrap());
        assert!(page
            .submit(TrackerKind::Skills, &EntryInput::new("Rust").with_level(3))
            .await
            .unwrap());

        assert_eq!(page.len(TrackerKind::Quotes), 1);
        assert_eq!(page.len(TrackerKind::Skills), 1);
        assert_eq!(page.len(TrackerKind::Items), 0);
        assert!(store.get(TrackerKind::Quotes.storage_key()).unwrap().is_some());
        assert!(store.get(TrackerKind::Items.storage_key()).unwrap().is_none());
    }

    #[tokio::test]
    async fn chat_submission_waits_for_reply() {
        let mut page = page();
        assert!(page.submit(TrackerKind::Chat, &EntryInput::new("help")).await.unwrap());
        assert_eq!(page.chat_log().len(), 2);
        assert!(!page.submit(TrackerKind::Chat, &EntryInput::new(" ")).await.unwrap());
        assert!(!page.delete(TrackerKind::Chat, 0).unwrap());
    }

    #[tokio::test]
    async fn money_counts_are_projected() {
        let mut page = page();
        for kind in ["income", "saving", "income"] {
            page.submit(TrackerKind::Money, &EntryInput::new("tip").with_kind(kind))
                .await
                .unwrap();
        }
        let section = page.render_kind(TrackerKind::Money);
        assert_eq!(section.find_by_id("incomeCount").unwrap().text_content(), "2");
        assert_eq!(section.find_by_id("savingCount").unwrap().text_content(), "1");
        assert_eq!(section.find_by_id("investCount").unwrap().text_content(), "0");
    }

    #[tokio::test]
    async fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = Arc::new(FileStore::open(&path).unwrap());
        let mut page = UserNotesPage::open(store, Duration::ZERO);
        page.submit(TrackerKind::Items, &EntryInput::new("key").with_kind("star"))
            .await
            .unwrap();
        drop(page);

        let page = UserNotesPage::open(Arc::new(FileStore::open(&path).unwrap()), Duration::ZERO);
        assert_eq!(page.len(TrackerKind::Items), 1);
        let view = page.render();
        assert!(view.find_by_id("itemBoxGrid").unwrap().text_content().contains("key"));
    }
}
