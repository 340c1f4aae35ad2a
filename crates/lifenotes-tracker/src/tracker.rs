//! Persisted list of tracker entries

use crate::date;
use crate::entry::{Categorized, EntryInput, KeyPress, TrackerEntry};
use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;
use lifenotes_view::Element;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Position in the stored array: a decoded entry, or a member kept verbatim
#[derive(Debug)]
enum Slot {
    Entry,
    Foreign(serde_json::Value),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Stored<'a, E> {
    Entry(&'a E),
    Foreign(&'a serde_json::Value),
}

/// One tracker: an ordered list of `E` stored as a JSON array under
/// `E::STORAGE_KEY` in `S`
///
/// Every change is written through immediately. A write failure leaves the
/// in-memory list as it was before the change. Stored members that do not
/// decode are hidden from the list but written back unchanged.
#[derive(Debug)]
pub struct Tracker<E, S> {
    store: S,
    entries: Vec<E>,
    layout: Vec<Slot>,
    _kind: PhantomData<fn() -> E>,
}

impl<E: TrackerEntry, S: KeyValueStore> Tracker<E, S> {
    /// Tracker over `store`, loaded from its current contents
    pub fn open(store: S) -> Self {
        let mut tracker = Self {
            store,
            entries: Vec::new(),
            layout: Vec::new(),
            _kind: PhantomData,
        };
        tracker.load();
        tracker
    }

    /// Re-read the stored array
    ///
    /// A read failure, invalid JSON or a non-array value yields an empty
    /// list. Array members that do not decode keep their stored position
    /// but are not listed.
    pub fn load(&mut self) {
        (self.entries, self.layout) = match self.store.get(E::STORAGE_KEY) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => (Vec::new(), Vec::new()),
            Err(e) => {
                tracing::warn!(key = E::STORAGE_KEY, error = %e, "tracker store unreadable");
                (Vec::new(), Vec::new())
            }
        };
        tracing::debug!(key = E::STORAGE_KEY, entries = self.entries.len(), "tracker loaded");
    }

    /// Current entries in display order
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List container with one row per entry, or the empty-state text
    #[must_use]
    pub fn render(&self) -> Element {
        let list = Element::new("div").with_id(E::LIST_ID);
        if self.entries.is_empty() {
            return match E::EMPTY_MESSAGE {
                Some(message) => list.with_child(
                    Element::new("p").with_class("tracker-empty").with_text(message),
                ),
                None => list,
            };
        }
        list.with_children(self.entries.iter().enumerate().map(|(i, e)| e.render(i)))
    }

    /// Add an entry stamped now; see [`Tracker::add_at`]
    ///
    /// # Errors
    ///
    /// Returns a store error if the array cannot be written.
    pub fn add(&mut self, input: &EntryInput) -> Result<bool> {
        self.add_at(input, date::now())
    }

    /// Add an entry with the given `createdAt`
    ///
    /// Returns `false` without touching the store when the required text is
    /// blank; `true` tells the caller to clear its inputs.
    ///
    /// # Errors
    ///
    /// Returns a store error if the array cannot be written.
    pub fn add_at(&mut self, input: &EntryInput, created_at: String) -> Result<bool> {
        let Some(entry) = E::from_input(input, created_at) else {
            return Ok(false);
        };
        self.push(entry)?;
        Ok(true)
    }

    /// Append a prepared entry and persist
    ///
    /// # Errors
    ///
    /// Returns a store error if the array cannot be written.
    pub fn push(&mut self, entry: E) -> Result<()> {
        self.entries.push(entry);
        self.layout.push(Slot::Entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            self.layout.pop();
            return Err(e);
        }
        tracing::info!(key = E::STORAGE_KEY, entries = self.entries.len(), "tracker entry added");
        Ok(())
    }

    /// Remove the entry at `index` and persist; `false` if out of range
    ///
    /// # Errors
    ///
    /// Returns a store error if the array cannot be written.
    pub fn delete(&mut self, index: usize) -> Result<bool> {
        if index >= self.entries.len() {
            tracing::debug!(key = E::STORAGE_KEY, index, "delete index out of range");
            return Ok(false);
        }
        let slot = self.slot_of(index);
        let removed = self.entries.remove(index);
        self.layout.remove(slot);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            self.layout.insert(slot, Slot::Entry);
            return Err(e);
        }
        tracing::info!(key = E::STORAGE_KEY, index, "tracker entry deleted");
        Ok(true)
    }

    /// Key press in the primary field: submits `input` when the kind
    /// treats `key` as a submit
    ///
    /// # Errors
    ///
    /// Returns a store error if the array cannot be written.
    pub fn key_press(&mut self, key: KeyPress, input: &EntryInput) -> Result<bool> {
        if E::submits_on(key) {
            self.add(input)
        } else {
            Ok(false)
        }
    }

    /// Stored position of the entry at display `index`
    fn slot_of(&self, index: usize) -> usize {
        self.layout
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, Slot::Entry))
            .nth(index)
            .map_or(self.layout.len(), |(pos, _)| pos)
    }

    fn persist(&self) -> Result<()> {
        let mut entries = self.entries.iter();
        let stored: Vec<Stored<'_, E>> = self
            .layout
            .iter()
            .filter_map(|slot| match slot {
                Slot::Entry => entries.next().map(Stored::Entry),
                Slot::Foreign(value) => Some(Stored::Foreign(value)),
            })
            .collect();
        let body = serde_json::to_string(&stored)
            .map_err(|e| StoreError::encode(E::STORAGE_KEY, e))?;
        self.store.set(E::STORAGE_KEY, &body)?;
        Ok(())
    }
}

impl<E: Categorized, S: KeyValueStore> Tracker<E, S> {
    /// Occurrences of each known type, in display order
    #[must_use]
    pub fn type_counts(&self) -> Vec<(&'static str, usize)> {
        E::KINDS
            .iter()
            .map(|&kind| {
                let count = self.entries.iter().filter(|e| e.kind_name() == kind).count();
                (kind, count)
            })
            .collect()
    }

    /// Write the counts into the `{type}Count` elements under `root`
    pub fn project_counts(&self, root: &mut Element) {
        for (kind, count) in self.type_counts() {
            if let Some(el) = root.find_by_id_mut(&format!("{kind}Count")) {
                el.set_text(count.to_string());
            }
        }
    }
}

fn decode<E: TrackerEntry>(raw: &str) -> (Vec<E>, Vec<Slot>) {
    let items = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items,
        Ok(_) | Err(_) => {
            tracing::warn!(key = E::STORAGE_KEY, "tracker value is not a JSON array, starting empty");
            return (Vec::new(), Vec::new());
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut layout = Vec::with_capacity(items.len());
    for item in items {
        match E::deserialize(&item) {
            Ok(entry) => {
                entries.push(entry);
                layout.push(Slot::Entry);
            }
            Err(_) => layout.push(Slot::Foreign(item)),
        }
    }
    let hidden = layout.len() - entries.len();
    if hidden > 0 {
        tracing::warn!(key = E::STORAGE_KEY, hidden, "malformed tracker entries kept but not listed");
    }
    (entries, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{MoneyTip, Quote};
    use crate::store::MemoryStore;
    use lifenotes_view::to_text;

    #[test]
    fn empty_tracker_renders_message() {
        let tracker: Tracker<Quote, _> = Tracker::open(MemoryStore::new());
        let list = tracker.render();
        assert_eq!(list.id(), Some("quoteList"));
        assert_eq!(
            list.text_content(),
            "まだ登録されていません。刺さった一文をメモしてみてください。"
        );
    }

    #[test]
    fn corrupt_value_loads_empty() {
        for raw in ["{oops", "{\"text\":\"a\"}", "42"] {
            let store = MemoryStore::with_entries([(Quote::STORAGE_KEY, raw)]);
            let tracker: Tracker<Quote, _> = Tracker::open(store);
            assert!(tracker.is_empty(), "{raw}");
        }
    }

    #[test]
    fn non_object_members_are_hidden() {
        let store = MemoryStore::with_entries([(Quote::STORAGE_KEY, r#"[{"text":"a"}, 3, "b"]"#)]);
        let tracker: Tracker<Quote, _> = Tracker::open(store);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn malformed_members_survive_writes() {
        let store = MemoryStore::with_entries([(
            Quote::STORAGE_KEY,
            r#"[{"text":"a"},3,{"text":"b"},"legacy"]"#,
        )]);
        let mut tracker: Tracker<Quote, _> = Tracker::open(&store);
        assert_eq!(tracker.len(), 2);

        assert!(tracker.delete(1).unwrap());
        let stored = store.get(Quote::STORAGE_KEY).unwrap().unwrap();
        assert_eq!(stored, r#"[{"text":"a","createdAt":""},3,"legacy"]"#);

        tracker.add_at(&EntryInput::new("c"), "2024-05-03".into()).unwrap();
        let stored = store.get(Quote::STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<serde_json::Value> = serde_json::from_str(&stored).unwrap();
        assert_eq!(persisted.len(), 4);
        assert_eq!(persisted[1], serde_json::json!(3));
        assert_eq!(persisted[2], serde_json::json!("legacy"));
        assert_eq!(persisted[3]["text"], "c");

        let reopened: Tracker<Quote, _> = Tracker::open(&store);
        let texts: Vec<_> = reopened.entries().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn blank_add_leaves_store_untouched() {
        let store = MemoryStore::new();
        let mut tracker: Tracker<Quote, _> = Tracker::open(&store);
        assert!(!tracker.add(&EntryInput::new(" \n ")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn add_and_delete_write_through() {
        let store = MemoryStore::new();
        let mut tracker: Tracker<Quote, _> = Tracker::open(&store);
        tracker.add_at(&EntryInput::new("one"), "2024-05-01".into()).unwrap();
        tracker.add_at(&EntryInput::new("two"), "2024-05-02".into()).unwrap();

        assert!(tracker.delete(0).unwrap());
        assert!(!tracker.delete(5).unwrap());

        let stored = store.get(Quote::STORAGE_KEY).unwrap().unwrap();
        assert_eq!(stored, r#"[{"text":"two","createdAt":"2024-05-02"}]"#);
        assert_eq!(to_text(&tracker.render()), "two\n2024-05-02 のメモ\n削除\n");
    }

    #[test]
    fn shift_enter_in_quote_field_is_ignored() {
        let mut tracker: Tracker<Quote, _> = Tracker::open(MemoryStore::new());
        let input = EntryInput::new("line");
        assert!(!tracker.key_press(KeyPress::Enter { shift: true }, &input).unwrap());
        assert!(tracker.key_press(KeyPress::Enter { shift: false }, &input).unwrap());
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn money_counts_per_type() {
        let mut tracker: Tracker<MoneyTip, _> = Tracker::open(MemoryStore::new());
        for (text, kind) in [("a", "income"), ("b", "invest"), ("c", "income"), ("d", "gift")] {
            tracker.add(&EntryInput::new(text).with_kind(kind)).unwrap();
        }
        assert_eq!(
            tracker.type_counts(),
            vec![("income", 2), ("saving", 0), ("invest", 1)]
        );

        let mut stats = Element::new("div")
            .with_child(Element::new("span").with_id("incomeCount").with_text("0"))
            .with_child(Element::new("span").with_id("savingCount"));
        tracker.project_counts(&mut stats);
        assert_eq!(stats.find_by_id("incomeCount").unwrap().text_content(), "2");
        assert_eq!(stats.find_by_id("savingCount").unwrap().text_content(), "0");
    }
}
