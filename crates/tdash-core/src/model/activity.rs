//! Activity timeline entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Filterable, Record, RecordId, UNKNOWN_BUCKET};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub title: String,
    pub at: DateTime<Utc>,
    pub status: ActivityStatus,
}

impl Record for Activity {
    const KIND: &'static str = "activity";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Filterable for Activity {
    fn category(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Overdue,
    Created,
    #[serde(other)]
    Unknown,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Created => "created",
            Self::Unknown => UNKNOWN_BUCKET,
        }
    }
}
