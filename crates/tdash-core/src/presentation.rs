//! Lookup table from tagged variants to their badge: icon id and color
//! token. Renderers resolve the token against their theme.

use crate::model::{
    ActivityStatus, EventCategory, InboxCategory, NotificationKind, Presence, Priority, TaskStatus,
};

/// Theme-independent color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    Success,
    Warning,
    Error,
    Info,
    Muted,
}

/// Icon and color for a tagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub color: ColorToken,
}

const fn badge_of(icon: &'static str, color: ColorToken) -> Badge {
    Badge { icon, color }
}

/// Every enumerated field that carries a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tagged {
    TaskStatus(TaskStatus),
    Priority(Priority),
    Notification(NotificationKind),
    Presence(Presence),
    Activity(ActivityStatus),
    Event(EventCategory),
    Inbox(InboxCategory),
}

macro_rules! tagged_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for Tagged {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        })*
    };
}

tagged_from! {
    TaskStatus => TaskStatus,
    Priority => Priority,
    NotificationKind => Notification,
    Presence => Presence,
    ActivityStatus => Activity,
    EventCategory => Event,
    InboxCategory => Inbox,
}

/// Fallback for values outside their closed set.
pub const UNKNOWN_BADGE: Badge = badge_of("bell", ColorToken::Muted);

/// Badge for a tagged value.
pub fn badge(tag: impl Into<Tagged>) -> Badge {
    use ColorToken::*;

    match tag.into() {
        Tagged::TaskStatus(status) => match status {
            TaskStatus::Todo => badge_of("circle", Info),
            TaskStatus::InProgress => badge_of("clock", Warning),
            TaskStatus::Completed => badge_of("check-circle", Success),
            TaskStatus::Overdue => badge_of("alert-circle", Error),
            TaskStatus::Unknown => UNKNOWN_BADGE,
        },
        Tagged::Priority(priority) => match priority {
            Priority::Low => badge_of("arrow-down", Muted),
            Priority::Medium => badge_of("minus", Info),
            Priority::High => badge_of("arrow-up", Warning),
            Priority::Urgent => badge_of("alert-triangle", Error),
            Priority::Unknown => UNKNOWN_BADGE,
        },
        Tagged::Notification(kind) => match kind {
            NotificationKind::Message => badge_of("message-circle", Primary),
            NotificationKind::Task => badge_of("check", Success),
            NotificationKind::Alert => badge_of("alert-circle", Error),
            NotificationKind::Mention => badge_of("star", Warning),
            NotificationKind::Team => badge_of("user-plus", Info),
            NotificationKind::Update => badge_of("git-pull-request", Primary),
            NotificationKind::Unknown => UNKNOWN_BADGE,
        },
        Tagged::Presence(presence) => match presence {
            Presence::Online => badge_of("dot", Success),
            Presence::Away => badge_of("dot", Warning),
            Presence::Offline => badge_of("dot", Muted),
            Presence::Unknown => UNKNOWN_BADGE,
        },
        Tagged::Activity(status) => match status {
            ActivityStatus::Completed => badge_of("check-circle", Success),
            ActivityStatus::Pending => badge_of("clock", Warning),
            ActivityStatus::Overdue => badge_of("alert-circle", Error),
            ActivityStatus::Created => badge_of("plus-circle", Primary),
            ActivityStatus::Unknown => UNKNOWN_BADGE,
        },
        Tagged::Event(category) => match category {
            EventCategory::Meeting => badge_of("users", Primary),
            EventCategory::Task => badge_of("check-square", Success),
            EventCategory::Reminder => badge_of("bell", Warning),
            EventCategory::Deadline => badge_of("flag", Error),
            EventCategory::Other | EventCategory::Unknown => badge_of("calendar", Muted),
        },
        Tagged::Inbox(category) => match category {
            InboxCategory::Work => badge_of("briefcase", Primary),
            InboxCategory::Personal => badge_of("user", Success),
            InboxCategory::Social => badge_of("users", Info),
            InboxCategory::Unknown => UNKNOWN_BADGE,
        },
    }
}
