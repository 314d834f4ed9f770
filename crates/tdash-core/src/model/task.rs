//! Task domain models.

use std::borrow::Cow;
use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::record::{Filterable, Record, RecordId, Searchable, UNKNOWN_BUCKET};

/// A task card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> DashResult<()> {
        if self.title.trim().is_empty() {
            return Err(DashError::schema(Self::KIND, self.id, "title is empty"));
        }
        if self.status == TaskStatus::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "status outside closed set"));
        }
        if self.priority == Priority::Unknown {
            return Err(DashError::schema(Self::KIND, self.id, "priority outside closed set"));
        }
        Ok(())
    }
}

impl Filterable for Task {
    fn category(&self) -> &str {
        self.status.as_str()
    }
}

impl Searchable for Task {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description", "tags"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "title" => Some(Cow::Borrowed(&self.title)),
            "description" => Some(Cow::Borrowed(&self.description)),
            "category" => Some(Cow::Borrowed(&self.category)),
            "tags" => Some(Cow::Owned(
                self.tags.iter().map(String::as_str).collect::<Vec<_>>().join(" "),
            )),
            _ => None,
        }
    }
}

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [Self::Todo, Self::InProgress, Self::Completed, Self::Overdue];

    /// Parse from string. Values outside the closed set map to `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "todo" | "pending" => Self::Todo,
            "in_progress" => Self::InProgress,
            "completed" | "done" => Self::Completed,
            "overdue" => Self::Overdue,
            _ => Self::Unknown,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
            Self::Unknown => "Other",
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Parse from string. Values outside the closed set map to `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "urgent" | "critical" => Self::Urgent,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }

    /// Sort rank, lowest first. `Unknown` ranks below `Low`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }
}
