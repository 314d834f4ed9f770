//! Chat, inbox and outgoing message models.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::record::{Filterable, Record, RecordId, Searchable, UNKNOWN_BUCKET};

/// Filter tag selecting starred inbox messages.
pub const STARRED_FILTER: &str = "starred";

/// One line of a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: RecordId,
    pub content: String,
    pub time: String,
    /// Sent by the local user; selects right-hand alignment.
    pub is_sent: bool,
}

impl Record for ChatMessage {
    const KIND: &'static str = "chat_message";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.content.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "content is empty"));
        }
        Ok(())
    }
}

/// A message in the inbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessage {
    pub id: RecordId,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub time: String,
    pub category: InboxCategory,
    #[serde(default)]
    pub has_attachment: bool,
    #[serde(default)]
    pub is_starred: bool,
}

impl Record for InboxMessage {
    const KIND: &'static str = "inbox_message";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.sender.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "sender is empty"));
        }
        if self.category == InboxCategory::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "category outside closed set"));
        }
        Ok(())
    }
}

impl Filterable for InboxMessage {
    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn flag(&self, tag: &str) -> Option<bool> {
        (tag == STARRED_FILTER).then_some(self.is_starred)
    }
}

impl Searchable for InboxMessage {
    const SEARCH_FIELDS: &'static [&'static str] = &["sender", "subject", "preview"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "sender" => Some(Cow::Borrowed(&self.sender)),
            "subject" => Some(Cow::Borrowed(&self.subject)),
            "preview" => Some(Cow::Borrowed(&self.preview)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxCategory {
    Work,
    Personal,
    Social,
    #[serde(other)]
    Unknown,
}

impl InboxCategory {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "work" => Self::Work,
            "personal" => Self::Personal,
            "social" => Self::Social,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Social => "social",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }
}

/// A direct message submitted from the compose modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub id: RecordId,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Record for OutboundMessage {
    const KIND: &'static str = "outbound_message";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.recipient.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "recipient is empty"));
        }
        Ok(())
    }
}
