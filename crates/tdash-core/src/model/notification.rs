//! Notification domain models.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::record::{Filterable, Record, RecordId, Searchable, UNKNOWN_BUCKET};

/// Filter tag selecting notifications by their unread flag.
pub const UNREAD_FILTER: &str = "unread";

/// A notification feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: DateTime<Utc>,
    pub unread: bool,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Record for Notification {
    const KIND: &'static str = "notification";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.title.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "title is empty"));
        }
        if self.kind == NotificationKind::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "type outside closed set"));
        }
        Ok(())
    }
}

impl Filterable for Notification {
    fn category(&self) -> &str {
        self.kind.as_str()
    }

    fn flag(&self, tag: &str) -> Option<bool> {
        (tag == UNREAD_FILTER).then_some(self.unread)
    }
}

impl Searchable for Notification {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "message"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "title" => Some(Cow::Borrowed(&self.title)),
            "message" => Some(Cow::Borrowed(&self.message)),
            _ => None,
        }
    }
}

/// Notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Task,
    Alert,
    Mention,
    Team,
    Update,
    #[serde(other)]
    Unknown,
}

impl NotificationKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "message" => Self::Message,
            "task" => Self::Task,
            "alert" => Self::Alert,
            "mention" => Self::Mention,
            "team" => Self::Team,
            "update" => Self::Update,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Task => "task",
            Self::Alert => "alert",
            Self::Mention => "mention",
            Self::Team => "team",
            Self::Update => "update",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }
}
