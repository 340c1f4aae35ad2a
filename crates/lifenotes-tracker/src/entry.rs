//! Tracker entry kinds
//!
//! Each kind owns its storage key, its empty-state text and its list
//! rendering. Stored arrays are decoded leniently: missing or wrongly typed
//! fields fall back to defaults, and unknown type values are kept verbatim
//! and rendered with the kind's default icon.

use crate::date::format_date;
use lifenotes_content::lenient;
use lifenotes_view::Element;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key event in a tracker's primary input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// Enter, with or without Shift
    Enter {
        /// Shift held
        shift: bool,
    },
    /// Any other key
    Other,
}

/// Raw form input of an add action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInput {
    /// Required text (quote, message, name or tip)
    pub text: String,
    /// Selected type, if the kind has one
    pub kind: Option<String>,
    /// Selected skill level
    pub level: Option<u32>,
    /// Optional note (network)
    pub note: Option<String>,
}

impl EntryInput {
    /// Input with just the required text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the selected type
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the skill level
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Trimmed required text, `None` when blank
    fn required_text(&self) -> Option<String> {
        let text = self.text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// One entry type of a tracker
pub trait TrackerEntry: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync {
    /// Key of the JSON array in the store
    const STORAGE_KEY: &'static str;

    /// Id of the list container
    const LIST_ID: &'static str;

    /// Text shown when the list is empty; `None` leaves it blank
    const EMPTY_MESSAGE: Option<&'static str>;

    /// Build an entry from form input; `None` when the required text is blank
    fn from_input(input: &EntryInput, created_at: String) -> Option<Self>;

    /// List row for the entry at `index`
    fn render(&self, index: usize) -> Element;

    /// Whether `key` in the primary field submits the form
    fn submits_on(key: KeyPress) -> bool {
        matches!(key, KeyPress::Enter { .. })
    }
}

/// Entries with a type whose occurrences are counted
pub trait Categorized: TrackerEntry {
    /// Known type values, in display order
    const KINDS: &'static [&'static str];

    /// Stored type value of this entry
    fn kind_name(&self) -> &str;
}

fn delete_button(class: &str, index: usize, label: &str) -> Element {
    Element::new("button")
        .with_class(class)
        .with_attr("data-index", index.to_string())
        .with_text(label)
}

const DELETE_LABEL: &str = "削除";

macro_rules! entry_kind {
    (
        $(#[$meta:meta])*
        $name:ident, fallback_icon = $fallback:literal,
        { $($variant:ident => ($value:literal, $icon:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// Unrecognized value, kept as stored
            Other(String),
        }

        impl $name {
            /// Known values, in display order
            pub const KNOWN: &'static [&'static str] = &[$($value),+];

            /// Stored value
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(s) => s,
                }
            }

            /// Display icon
            #[must_use]
            pub fn icon(&self) -> &'static str {
                match self {
                    $(Self::$variant => $icon,)+
                    Self::Other(_) => $fallback,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                match kind {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

entry_kind! {
    /// Item box type
    ItemType, fallback_icon = "🎁", {
        Power => ("power", "💪"),
        Heal => ("heal", "💚"),
        Shield => ("shield", "🛡️"),
        Star => ("star", "⭐"),
    }
}

entry_kind! {
    /// Money tip type
    MoneyType, fallback_icon = "💰", {
        Income => ("income", "📈"),
        Saving => ("saving", "💡"),
        Invest => ("invest", "📚"),
    }
}

entry_kind! {
    /// Connection type
    ContactType, fallback_icon = "👤", {
        Mentor => ("mentor", "👥"),
        Peer => ("peer", "🤝"),
        Support => ("support", "🌱"),
    }
}

impl Default for ItemType {
    fn default() -> Self {
        Self::Power
    }
}

impl Default for MoneyType {
    fn default() -> Self {
        Self::Income
    }
}

impl Default for ContactType {
    fn default() -> Self {
        Self::Mentor
    }
}

fn kind<'de, D, K>(deserializer: D) -> Result<K, D::Error>
where
    D: Deserializer<'de>,
    K: From<String>,
{
    lenient::string(deserializer).map(K::from)
}

fn input_kind<K: From<String> + Default>(input: &EntryInput) -> K {
    input
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map_or_else(K::default, |k| K::from(k.to_string()))
}

/// Saved quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Quote text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl TrackerEntry for Quote {
    const STORAGE_KEY: &'static str = "jn_user_quotes_v2";
    const LIST_ID: &'static str = "quoteList";
    const EMPTY_MESSAGE: Option<&'static str> =
        Some("まだ登録されていません。刺さった一文をメモしてみてください。");

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            text: input.required_text()?,
            created_at,
        })
    }

    fn render(&self, index: usize) -> Element {
        Element::new("div")
            .with_class("quote-item")
            .with_child(
                Element::new("div")
                    .with_class("quote-main")
                    .with_child(Element::new("div").with_class("quote-text").with_text(&self.text))
                    .with_child(
                        Element::new("div")
                            .with_class("quote-date")
                            .with_text(format!("{} のメモ", format_date(&self.created_at))),
                    ),
            )
            .with_child(delete_button("quote-delete", index, DELETE_LABEL))
    }

    /// Multi-line field: Shift+Enter inserts a line break
    fn submits_on(key: KeyPress) -> bool {
        key == KeyPress::Enter { shift: false }
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The reader
    #[default]
    User,
    /// The canned responder
    Ai,
}

impl ChatRole {
    /// Stored value and bubble class
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

impl<'de> Deserialize<'de> for ChatRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let role = lenient::string(deserializer)?;
        Ok(if role == "ai" { Self::Ai } else { Self::User })
    }
}

/// Chat log message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Author
    #[serde(default)]
    pub role: ChatRole,
    /// Message text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl ChatMessage {
    /// Reply from the responder
    pub fn reply(text: impl Into<String>, created_at: String) -> Self {
        Self {
            role: ChatRole::Ai,
            text: text.into(),
            created_at,
        }
    }
}

impl TrackerEntry for ChatMessage {
    const STORAGE_KEY: &'static str = "jn_user_chat_log_v1";
    const LIST_ID: &'static str = "chatWindow";
    const EMPTY_MESSAGE: Option<&'static str> = None;

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            role: ChatRole::User,
            text: input.required_text()?,
            created_at,
        })
    }

    fn render(&self, _index: usize) -> Element {
        Element::new("div")
            .with_child(
                Element::new("div")
                    .with_class(&format!("chat-message {}", self.role.as_str()))
                    .with_text(&self.text),
            )
            .with_child(
                Element::new("div")
                    .with_class("chat-meta")
                    .with_text(format_date(&self.created_at)),
            )
    }
}

/// Item box entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item name
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Item type
    #[serde(default, rename = "type", deserialize_with = "kind")]
    pub kind: ItemType,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl TrackerEntry for Item {
    const STORAGE_KEY: &'static str = "jn_user_items_v1";
    const LIST_ID: &'static str = "itemBoxGrid";
    const EMPTY_MESSAGE: Option<&'static str> =
        Some("まだアイテムがありません。自分を元気にしてくれるものを追加しましょう。");

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            name: input.required_text()?,
            kind: input_kind(input),
            created_at,
        })
    }

    fn render(&self, index: usize) -> Element {
        Element::new("div")
            .with_class(&format!("item-card {}", self.kind))
            .with_child(delete_button("item-delete", index, "✕"))
            .with_child(Element::new("span").with_class("item-icon").with_text(self.kind.icon()))
            .with_child(Element::new("span").with_class("item-name").with_text(&self.name))
    }
}

/// Skill level used when the stored one is missing or malformed
pub const DEFAULT_SKILL_LEVEL: u32 = 1;

fn default_level() -> u32 {
    DEFAULT_SKILL_LEVEL
}

fn level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let level = match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(level.unwrap_or(DEFAULT_SKILL_LEVEL))
}

/// Learned skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Level
    #[serde(default = "default_level", deserialize_with = "level")]
    pub level: u32,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl TrackerEntry for Skill {
    const STORAGE_KEY: &'static str = "jn_user_skills_v1";
    const LIST_ID: &'static str = "skillList";
    const EMPTY_MESSAGE: Option<&'static str> =
        Some("まだ技がありません。身につけたスキルを追加しましょう。");

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            name: input.required_text()?,
            level: input.level.unwrap_or(DEFAULT_SKILL_LEVEL),
            created_at,
        })
    }

    fn render(&self, index: usize) -> Element {
        Element::new("div")
            .with_class(&format!("skill-item lv{}", self.level))
            .with_child(
                Element::new("span")
                    .with_class("skill-level")
                    .with_text(format!("Lv.{}", self.level)),
            )
            .with_child(Element::new("span").with_class("skill-name").with_text(&self.name))
            .with_child(delete_button("skill-delete", index, DELETE_LABEL))
    }
}

/// Money tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTip {
    /// Tip text
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    /// Tip type
    #[serde(default, rename = "type", deserialize_with = "kind")]
    pub kind: MoneyType,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl TrackerEntry for MoneyTip {
    const STORAGE_KEY: &'static str = "jn_user_money_v1";
    const LIST_ID: &'static str = "moneyList";
    const EMPTY_MESSAGE: Option<&'static str> =
        Some("まだ記録がありません。お金に関する知恵を追加しましょう。");

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            text: input.required_text()?,
            kind: input_kind(input),
            created_at,
        })
    }

    fn render(&self, index: usize) -> Element {
        Element::new("div")
            .with_class(&format!("money-item {}", self.kind))
            .with_child(Element::new("span").with_class("money-type").with_text(self.kind.icon()))
            .with_child(Element::new("span").with_class("money-text").with_text(&self.text))
            .with_child(delete_button("money-delete", index, DELETE_LABEL))
    }
}

impl Categorized for MoneyTip {
    const KINDS: &'static [&'static str] = MoneyType::KNOWN;

    fn kind_name(&self) -> &str {
        self.kind.as_str()
    }
}

/// Personal connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Name
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Free note, may be empty
    #[serde(default, deserialize_with = "lenient::string")]
    pub note: String,
    /// Connection type
    #[serde(default, rename = "type", deserialize_with = "kind")]
    pub kind: ContactType,
    /// Stored timestamp
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
}

impl TrackerEntry for Contact {
    const STORAGE_KEY: &'static str = "jn_user_network_v1";
    const LIST_ID: &'static str = "networkList";
    const EMPTY_MESSAGE: Option<&'static str> =
        Some("まだ記録がありません。大切なつながりを追加しましょう。");

    fn from_input(input: &EntryInput, created_at: String) -> Option<Self> {
        Some(Self {
            name: input.required_text()?,
            note: input.note.as_deref().map(str::trim).unwrap_or_default().to_string(),
            kind: input_kind(input),
            created_at,
        })
    }

    fn render(&self, index: usize) -> Element {
        let mut row = Element::new("div")
            .with_class(&format!("network-item {}", self.kind))
            .with_child(Element::new("span").with_class("network-type").with_text(self.kind.icon()))
            .with_child(Element::new("span").with_class("network-name").with_text(&self.name));
        if !self.note.is_empty() {
            row.push(Element::new("span").with_class("network-note").with_text(&self.note));
        }
        row.with_child(delete_button("network-delete", index, DELETE_LABEL))
    }
}

impl Categorized for Contact {
    const KINDS: &'static [&'static str] = ContactType::KNOWN;

    fn kind_name(&self) -> &str {
        self.kind.as_str()
    }
}

/// The six trackers of the user-notes page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerKind {
    /// Quote stock
    Quotes,
    /// Worry chat log
    Chat,
    /// Item box
    Items,
    /// Skill collection
    Skills,
    /// Money tracker
    Money,
    /// Network map
    Network,
}

impl TrackerKind {
    /// All kinds in page order
    pub const ALL: [TrackerKind; 6] = [
        Self::Quotes,
        Self::Chat,
        Self::Items,
        Self::Skills,
        Self::Money,
        Self::Network,
    ];

    /// Command-line name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quotes => "quotes",
            Self::Chat => "chat",
            Self::Items => "items",
            Self::Skills => "skills",
            Self::Money => "money",
            Self::Network => "network",
        }
    }

    /// Store key of the kind's array
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Quotes => Quote::STORAGE_KEY,
            Self::Chat => ChatMessage::STORAGE_KEY,
            Self::Items => Item::STORAGE_KEY,
            Self::Skills => Skill::STORAGE_KEY,
            Self::Money => MoneyTip::STORAGE_KEY,
            Self::Network => Contact::STORAGE_KEY,
        }
    }
}

impl fmt::Display for TrackerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized tracker name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tracker: {0}")]
pub struct UnknownTracker(pub String);

impl FromStr for TrackerKind {
    type Err = UnknownTracker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownTracker(s.to_string()))
    }
}
