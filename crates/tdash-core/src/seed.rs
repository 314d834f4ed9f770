//! Initial data each view mounts with. Times are relative to the instant
//! the view is built, so relative labels stay meaningful.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::context::TimezonePolicy;
use crate::forms::ProfileForm;
use crate::model::{
    Activity, ActivityStatus, ChatMessage, Event, EventCategory, InboxCategory, InboxMessage,
    MemberStats, Notification, NotificationKind, Presence, Priority, ProjectTag, SettingValue,
    Settings, SettingsSection, Task, TaskStatus, TeamMember,
};

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// One seeded task row: title, description, status, priority, due offset
/// in days, category, tags and age in hours.
type TaskRow = (
    &'static str,
    &'static str,
    TaskStatus,
    Priority,
    Option<i64>,
    &'static str,
    &'static [&'static str],
    i64,
);

const TASKS: [TaskRow; 8] = [
    (
        "Create dashboard layout",
        "Grid of stats cards, progress and timeline",
        TaskStatus::Completed,
        Priority::High,
        Some(-3),
        "design",
        &["ui", "dashboard"],
        120,
    ),
    (
        "Implement dark mode",
        "Theme tokens for light and dark palettes",
        TaskStatus::InProgress,
        Priority::Medium,
        Some(2),
        "development",
        &["ui", "theme"],
        96,
    ),
    (
        "Fix responsive issues",
        "Sidebar overlaps content below 768px",
        TaskStatus::InProgress,
        Priority::Urgent,
        Some(1),
        "development",
        &["bug", "mobile"],
        72,
    ),
    (
        "Add task creation form",
        "Modal with title, due date, priority and tags",
        TaskStatus::Todo,
        Priority::Medium,
        Some(5),
        "development",
        &["forms"],
        48,
    ),
    (
        "Export tasks",
        "CSV export of the filtered task list",
        TaskStatus::Todo,
        Priority::Low,
        Some(10),
        "development",
        &["feature"],
        30,
    ),
    (
        "Quarterly roadmap review",
        "Collect feedback from product and design",
        TaskStatus::Overdue,
        Priority::High,
        Some(-1),
        "research",
        &["planning"],
        200,
    ),
    (
        "Design system audit",
        "Check spacing and radius tokens across pages",
        TaskStatus::Completed,
        Priority::Medium,
        Some(-5),
        "design",
        &["design-system"],
        150,
    ),
    (
        "Launch newsletter",
        "Announce the mobile app beta",
        TaskStatus::Todo,
        Priority::High,
        None,
        "marketing",
        &["launch"],
        6,
    ),
];

pub fn tasks(now: DateTime<Utc>) -> Vec<Task> {
    let today = now.date_naive();
    (1..)
        .zip(TASKS)
        .map(
            |(id, (title, description, status, priority, due_in, category, t, age_hours))| Task {
                id,
                title: title.to_string(),
                description: description.to_string(),
                status,
                priority,
                due_date: due_in.map(|days| today + Duration::days(days)),
                category: category.to_string(),
                tags: tags(t),
                created_at: now - Duration::hours(age_hours),
            },
        )
        .collect()
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let note = |id, kind, (title, message): (&str, &str), seconds_ago, unread, actions: &[&str]| {
        Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            time: now - Duration::seconds(seconds_ago),
            unread,
            actions: strings(actions),
        }
    };

    vec![
        note(
            1,
            NotificationKind::Message,
            (
                "New message from Sarah",
                "Hey! I just reviewed the project proposal and left some comments...",
            ),
            1_800,
            true,
            &["Reply", "Mark as Read"],
        ),
        note(
            2,
            NotificationKind::Task,
            (
                "Task completed",
                "Frontend development for the dashboard has been marked as complete.",
            ),
            3_600,
            true,
            &["View Task", "Dismiss"],
        ),
        note(
            3,
            NotificationKind::Alert,
            (
                "System Update",
                "The system will undergo maintenance in 2 hours. Please save your work.",
            ),
            7_200,
            false,
            &["Learn More"],
        ),
        note(
            4,
            NotificationKind::Mention,
            (
                "Mentioned in a comment",
                "@david What do you think about the new design system implementation?",
            ),
            86_400,
            true,
            &["View Thread", "Reply"],
        ),
        note(
            5,
            NotificationKind::Team,
            ("New team member", "Emily Rodriguez has joined the Design team."),
            172_800,
            false,
            &["Welcome", "View Profile"],
        ),
    ]
}

/// One seeded event row: title, day offset, start hour and minute,
/// duration in minutes, location, attendee count and category.
type EventRow = (&'static str, i64, u32, u32, u32, &'static str, u32, EventCategory);

const EVENTS: [EventRow; 5] = [
    ("Team standup", 0, 9, 30, 15, "Zoom", 8, EventCategory::Meeting),
    ("Design review", 0, 14, 0, 60, "Room 4B", 5, EventCategory::Meeting),
    ("Sprint deadline", 2, 17, 0, 30, "", 0, EventCategory::Deadline),
    ("Client call", 3, 11, 0, 45, "Phone", 3, EventCategory::Meeting),
    ("Submit expense report", -2, 10, 0, 15, "", 0, EventCategory::Reminder),
];

/// Events around `today`, placed in `timezone` so they land on the
/// intended calendar day.
pub fn events(today: NaiveDate, timezone: TimezonePolicy) -> Vec<Event> {
    (1..)
        .zip(EVENTS)
        .map(|(id, (title, day, hour, minute, duration, location, attendees, category))| {
            let date = today + Duration::days(day);
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
            let starts_at = timezone
                .instant_at(date, time)
                .unwrap_or_else(|| date.and_time(time).and_utc());
            Event {
                id,
                title: title.to_string(),
                description: String::new(),
                starts_at,
                duration_minutes: duration,
                location: location.to_string(),
                attendees,
                category,
            }
        })
        .collect()
}

pub fn team() -> Vec<TeamMember> {
    let member = |id, (name, role): (&str, &str), status, stats: (u32, u32, u8), projects| {
        TeamMember {
            id,
            name: name.to_string(),
            role: role.to_string(),
            status,
            stats: MemberStats {
                projects: stats.0,
                tasks: stats.1,
                completed_pct: stats.2,
            },
            projects,
        }
    };
    let mobile = || ProjectTag::new("Mobile App", "#3B82F6");
    let dashboard = || ProjectTag::new("Dashboard", "#10B981");

    vec![
        member(
            1,
            ("Sarah Johnson", "Product Manager"),
            Presence::Online,
            (12, 34, 89),
            vec![mobile(), dashboard()],
        ),
        member(
            2,
            ("Michael Chen", "Senior Developer"),
            Presence::Away,
            (8, 27, 92),
            vec![
                ProjectTag::new("API Integration", "#F59E0B"),
                ProjectTag::new("Cloud Migration", "#8B5CF6"),
            ],
        ),
        member(
            3,
            ("Emily Rodriguez", "UI/UX Designer"),
            Presence::Online,
            (15, 41, 95),
            vec![ProjectTag::new("Design System", "#EF4444"), mobile()],
        ),
        member(
            4,
            ("David Kim", "Frontend Developer"),
            Presence::Offline,
            (6, 19, 87),
            vec![dashboard(), ProjectTag::new("Website Redesign", "#8B5CF6")],
        ),
    ]
}

pub fn chat() -> Vec<ChatMessage> {
    let line = |id, content: &str, time: &str, is_sent| ChatMessage {
        id,
        content: content.to_string(),
        time: time.to_string(),
        is_sent,
    };

    vec![
        line(1, "Hi there! How can I help you today?", "10:30 AM", false),
        line(2, "I had a question about the latest project updates.", "10:31 AM", true),
        line(
            3,
            "Sure, I'd be happy to help. What specifically would you like to know?",
            "10:32 AM",
            false,
        ),
    ]
}

/// One seeded inbox row: sender, subject, preview, time label, category,
/// attachment flag and star flag.
type InboxRow = (&'static str, &'static str, &'static str, &'static str, InboxCategory, bool, bool);

const INBOX: [InboxRow; 3] = [
    (
        "Shubham Shrestha",
        "Project Update Meeting",
        "Hi team, I wanted to share the latest updates from our project meeting yesterday...",
        "10:30 AM",
        InboxCategory::Work,
        true,
        false,
    ),
    (
        "Sarah Wilson",
        "Weekend Plans",
        "Hey! Are you free this weekend? I was thinking we could grab lunch and catch up...",
        "9:15 AM",
        InboxCategory::Personal,
        false,
        true,
    ),
    (
        "Tech Newsletter",
        "This Week in Tech: Latest Updates",
        "Discover the newest developments in AI, web development, \
         and more in our weekly digest...",
        "Yesterday",
        InboxCategory::Social,
        false,
        false,
    ),
];

pub fn inbox() -> Vec<InboxMessage> {
    (1..)
        .zip(INBOX)
        .map(
            |(id, (sender, subject, preview, time, category, has_attachment, is_starred))| {
                InboxMessage {
                    id,
                    sender: sender.to_string(),
                    subject: subject.to_string(),
                    preview: preview.to_string(),
                    time: time.to_string(),
                    category,
                    has_attachment,
                    is_starred,
                }
            },
        )
        .collect()
}

pub fn activities(now: DateTime<Utc>) -> Vec<Activity> {
    let activity = |id, title: &str, minutes_ago, status| Activity {
        id,
        title: title.to_string(),
        at: now - Duration::minutes(minutes_ago),
        status,
    };

    vec![
        activity(1, "Task \"Create dashboard\" completed", 10, ActivityStatus::Completed),
        activity(2, "New task \"Fix responsive issues\" assigned", 60, ActivityStatus::Pending),
        activity(3, "Task \"Implement dark mode\" overdue", 120, ActivityStatus::Overdue),
        activity(4, "Project kickoff meeting completed", 60 * 24, ActivityStatus::Completed),
        activity(5, "New feature \"Export tasks\" added", 60 * 48, ActivityStatus::Created),
    ]
}

pub fn profile() -> ProfileForm {
    ProfileForm {
        name: "Shubham Shrestha".to_string(),
        email: "shubham@example.com".to_string(),
        role: "Project Manager".to_string(),
    }
}

pub fn settings() -> Settings {
    fn section(entries: &[(&str, SettingValue)]) -> BTreeMap<String, SettingValue> {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }
    let choice = SettingValue::choice;
    let on = SettingValue::Bool(true);
    let off = SettingValue::Bool(false);

    let mut sections = BTreeMap::new();
    sections.insert(
        SettingsSection::Account,
        section(&[
            ("email", choice("user@example.com", &["user@example.com"])),
            ("language", choice("english", &["english", "spanish", "french"])),
            ("timezone", choice("UTC+0", &["UTC-8", "UTC-5", "UTC+0", "UTC+1", "UTC+8"])),
        ]),
    );
    sections.insert(
        SettingsSection::Notifications,
        section(&[
            ("email", on.clone()),
            ("push", on.clone()),
            ("desktop", off.clone()),
            ("mentions", on.clone()),
            ("updates", on.clone()),
        ]),
    );
    sections.insert(
        SettingsSection::Appearance,
        section(&[
            ("theme", choice("dark", &["light", "dark", "system"])),
            ("density", choice("comfortable", &["compact", "comfortable", "spacious"])),
            ("animations", on.clone()),
            ("fontSize", choice("medium", &["small", "medium", "large"])),
            ("contrast", choice("default", &["default", "high"])),
        ]),
    );
    sections.insert(
        SettingsSection::Privacy,
        section(&[
            ("profileVisibility", choice("public", &["public", "private", "team"])),
            ("activityStatus", on.clone()),
            ("dataSharing", off),
            ("twoFactor", on),
        ]),
    );
    Settings::new(sections)
}
