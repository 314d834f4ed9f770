//! Domain records shown by the dashboard views.

pub mod activity;
pub mod event;
pub mod member;
pub mod message;
pub mod notification;
pub mod settings;
pub mod task;

pub use activity::{Activity, ActivityStatus};
pub use event::{Event, EventCategory};
pub use member::{MemberStats, Presence, ProjectTag, RoleGroup, TeamMember};
pub use message::{ChatMessage, InboxCategory, InboxMessage, OutboundMessage};
pub use notification::{Notification, NotificationKind};
pub use settings::{SettingValue, Settings, SettingsSection};
pub use task::{Priority, Task, TaskStatus};

/// Initials of a display name: first letter of each word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
