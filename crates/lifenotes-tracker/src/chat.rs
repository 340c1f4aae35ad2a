//! Worry-consultation chat with canned replies

use crate::date;
use crate::entry::{ChatMessage, EntryInput};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::tracker::Tracker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Replies drawn for every user message
pub const DEMO_REPLIES: [&str; 4] = [
    "いまの気持ちを言葉にできているだけで、大きな一歩です。",
    "すぐに答えを出さなくても大丈夫です。少しずつ整理していきましょう。",
    "一周目の自分にとっては重たいテーマでも、二周目視点では“素材”になります。",
    "誰かと比較するより、「昨日の自分」と比べてみてもいいかもしれません。",
];

/// Delay before the reply is appended
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(400);

/// Chat log plus reply generator
#[derive(Debug)]
pub struct ChatSession<S> {
    log: Tracker<ChatMessage, S>,
    replies: Vec<String>,
    delay: Duration,
    rng: StdRng,
}

impl<S: KeyValueStore> ChatSession<S> {
    /// Session over the stored log with the demo replies
    pub fn open(store: S) -> Self {
        Self {
            log: Tracker::open(store),
            replies: DEMO_REPLIES.iter().map(ToString::to_string).collect(),
            delay: DEFAULT_REPLY_DELAY,
            rng: StdRng::seed_from_u64(rand::rng().random()),
        }
    }

    /// Set the reply delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Seed reply selection
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the reply pool; an empty pool disables replies
    #[must_use]
    pub fn with_replies(mut self, replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.replies = replies.into_iter().map(Into::into).collect();
        self
    }

    /// Stored conversation
    pub fn log(&self) -> &Tracker<ChatMessage, S> {
        &self.log
    }

    /// Send a message
    ///
    /// The user message is persisted at once; the reply follows after the
    /// configured delay. Blank text sends nothing and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns a store error if either message cannot be written.
    pub async fn send(&mut self, text: &str) -> Result<Option<ChatMessage>> {
        if !self.log.add(&EntryInput::new(text))? {
            return Ok(None);
        }
        if self.replies.is_empty() {
            return Ok(None);
        }

        let pick = self.rng.random_range(0..self.replies.len());
        let reply = ChatMessage::reply(self.replies[pick].clone(), date::now());

        tokio::time::sleep(self.delay).await;
        self.log.push(reply.clone())?;
        tracing::debug!(reply = pick, "chat reply appended");
        Ok(Some(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ChatRole;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn reply_follows_user_message() {
        let mut chat = ChatSession::open(MemoryStore::new()).with_delay(Duration::ZERO).with_seed(7);
        let reply = chat.send("  疲れた ").await.unwrap().unwrap();

        assert_eq!(reply.role, ChatRole::Ai);
        assert!(DEMO_REPLIES.contains(&reply.text.as_str()));

        let log = chat.log().entries();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].text, "疲れた");
        assert_eq!(log[0].role, ChatRole::User);
    }

    #[tokio::test]
    async fn custom_reply_pool() {
        let mut chat = ChatSession::open(MemoryStore::new())
            .with_delay(Duration::ZERO)
            .with_replies(["only"]);
        assert_eq!(chat.send("hi").await.unwrap().unwrap().text, "only");

        let mut silent = ChatSession::open(MemoryStore::new())
            .with_delay(Duration::ZERO)
            .with_replies(Vec::<String>::new());
        assert!(silent.send("hi").await.unwrap().is_none());
        assert_eq!(silent.log().len(), 1);
    }

    #[tokio::test]
    async fn blank_message_sends_nothing() {
        let mut chat = ChatSession::open(MemoryStore::new()).with_delay(Duration::ZERO);
        assert!(chat.send("   ").await.unwrap().is_none());
        assert!(chat.log().is_empty());
    }

    #[tokio::test]
    async fn user_message_is_stored_before_the_delay() {
        let mut chat = ChatSession::open(MemoryStore::new()).with_delay(Duration::from_secs(30));
        let pending = tokio::time::timeout(Duration::from_millis(20), chat.send("hello")).await;
        assert!(pending.is_err());
        assert_eq!(chat.log().len(), 1);
    }
}
