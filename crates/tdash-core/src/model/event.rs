//! Calendar event models.

use std::borrow::Cow;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::record::{Filterable, Record, RecordId, Searchable, UNKNOWN_BUCKET};

/// A calendar event. The calendar day it falls on depends on the
/// configured [`TimezonePolicy`](crate::context::TimezonePolicy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendees: u32,
    pub category: EventCategory,
}

impl Event {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::minutes(i64::from(self.duration_minutes))
    }
}

impl Record for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.title.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "title is empty"));
        }
        if self.category == EventCategory::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "category outside closed set"));
        }
        Ok(())
    }
}

impl Filterable for Event {
    fn category(&self) -> &str {
        self.category.as_str()
    }
}

impl Searchable for Event {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description", "location"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "title" => Some(Cow::Borrowed(&self.title)),
            "description" => Some(Cow::Borrowed(&self.description)),
            "location" => Some(Cow::Borrowed(&self.location)),
            _ => None,
        }
    }
}

/// Event kind; doubles as the event's color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Meeting,
    Task,
    Reminder,
    Deadline,
    Other,
    #[serde(other)]
    Unknown,
}

impl EventCategory {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "meeting" => Self::Meeting,
            "task" => Self::Task,
            "reminder" => Self::Reminder,
            "deadline" => Self::Deadline,
            "other" => Self::Other,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Task => "task",
            Self::Reminder => "reminder",
            Self::Deadline => "deadline",
            Self::Other => "other",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive;
    use crate::store::Store;
    use chrono::TimeZone;

    fn event(id: RecordId, category: EventCategory) -> Event {
        Event {
            id,
            title: format!("Event {id}"),
            description: String::new(),
            starts_at: Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap(),
            duration_minutes: 30,
            location: String::new(),
            attendees: 0,
            category,
        }
    }

    #[test]
    fn test_other_and_unknown_are_separate_buckets() {
        let store = Store::initialize_unchecked(vec![
            event(1, EventCategory::Other),
            event(2, EventCategory::Unknown),
            event(3, EventCategory::Meeting),
        ]);

        let other: Vec<_> = derive::filter_by_tag(store.records(), "other")
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(other, vec![1]);
        let unknown: Vec<_> = derive::filter_by_tag(store.records(), UNKNOWN_BUCKET)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(unknown, vec![2]);

        let buckets = derive::count_by_bucket(store.records());
        assert_eq!(buckets.get("other"), Some(&1));
        assert_eq!(buckets.get(UNKNOWN_BUCKET), Some(&1));
    }

    #[test]
    fn test_unrecognized_category_deserializes_to_unknown() {
        let category: EventCategory = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(category, EventCategory::Unknown);
        assert_eq!(EventCategory::from_str("Other"), EventCategory::Other);
    }
}
