//! Form drafts behind the modals, and the submit-then-close transition.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use crate::context::TimezonePolicy;
use crate::error::{DashError, DashResult};
use crate::model::{ChatMessage, Event, EventCategory, OutboundMessage, Priority, Task, TaskStatus};
use crate::record::{Record, RecordId};
use crate::store::Store;
use crate::view_state::{ModalId, ViewState};

/// Minimum length of a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hand `record` to the store, then close `modal`.
///
/// A rejected append (duplicate id, broken invariant) leaves the modal
/// open so the form can be corrected.
pub fn submit<T: Record>(
    store: &mut Store<T>,
    view: &mut ViewState,
    modal: ModalId,
    record: T,
) -> DashResult<RecordId> {
    let id = record.id();
    store.append(record)?;
    view.close_modal(modal);
    info!(kind = T::KIND, id, "Form submitted");
    Ok(id)
}

fn required(value: &str, field: &str) -> DashResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DashError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// New task form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub category: String,
    pub tags: Vec<String>,
}

impl Default for NewTaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
            category: "general".to_string(),
            tags: Vec::new(),
        }
    }
}

impl NewTaskForm {
    pub fn into_task(self, id: RecordId, now: DateTime<Utc>) -> DashResult<Task> {
        let title = required(&self.title, "Title")?;
        if self.priority == Priority::Unknown {
            return Err(DashError::validation("Priority must be low, medium, high or urgent"));
        }
        let tags: BTreeSet<String> = self
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Task {
            id,
            title,
            description: self.description.trim().to_string(),
            status: TaskStatus::Todo,
            priority: self.priority,
            due_date: self.due_date,
            category: self.category,
            tags,
            created_at: now,
        })
    }
}

/// New event form. Date and time are wall-clock values in the
/// configured timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEventForm {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub location: String,
    pub attendees: u32,
    pub category: EventCategory,
}

impl NewEventForm {
    pub fn new(title: &str, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            date,
            time,
            duration_minutes: 60,
            location: String::new(),
            attendees: 0,
            category: EventCategory::Meeting,
        }
    }

    pub fn into_event(self, id: RecordId, timezone: TimezonePolicy) -> DashResult<Event> {
        let title = required(&self.title, "Title")?;
        if self.duration_minutes == 0 {
            return Err(DashError::validation("Duration must be at least one minute"));
        }
        if self.category == EventCategory::Unknown {
            return Err(DashError::validation("Unknown event category"));
        }

        let starts_at = timezone.instant_at(self.date, self.time).ok_or_else(|| {
            DashError::validation(format!(
                "{} {} does not exist or is ambiguous locally",
                self.date, self.time
            ))
        })?;

        Ok(Event {
            id,
            title,
            description: self.description.trim().to_string(),
            starts_at,
            duration_minutes: self.duration_minutes,
            location: self.location.trim().to_string(),
            attendees: self.attendees,
            category: self.category,
        })
    }
}

/// Chat input box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatComposer {
    pub draft: String,
}

impl ChatComposer {
    /// Send the trimmed draft as a local message. Blank drafts are ignored
    /// and return `Ok(None)`; a sent draft is cleared.
    pub fn send(
        &mut self,
        store: &mut Store<ChatMessage>,
        time_label: &str,
    ) -> DashResult<Option<RecordId>> {
        let content = self.draft.trim();
        if content.is_empty() {
            debug!("Blank chat draft ignored");
            return Ok(None);
        }
        let id = store.next_id()?;
        store.append(ChatMessage {
            id,
            content: content.to_string(),
            time: time_label.to_string(),
            is_sent: true,
        })?;
        self.draft.clear();
        Ok(Some(id))
    }
}

/// Direct message compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MessageDraft {
    pub fn into_message(self, id: RecordId) -> DashResult<OutboundMessage> {
        Ok(OutboundMessage {
            id,
            recipient: required(&self.recipient, "Recipient")?,
            subject: required(&self.subject, "Subject")?,
            body: required(&self.body, "Message")?,
        })
    }
}

/// Profile tab of the profile settings modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl ProfileForm {
    pub fn validate(&self) -> DashResult<()> {
        required(&self.name, "Full name")?;
        let email = required(&self.email, "Email")?;
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(DashError::validation(format!("'{email}' is not an email address"))),
        }
    }
}

/// Security tab of the profile settings modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn validate(&self) -> DashResult<()> {
        if self.current.is_empty() {
            return Err(DashError::validation("Current password is required"));
        }
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(DashError::validation(format!(
                "New password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.new != self.confirm {
            return Err(DashError::validation("Passwords do not match"));
        }
        if self.new == self.current {
            return Err(DashError::validation("New password must differ from the current one"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_task_requires_title() {
        let form = NewTaskForm {
            title: "   ".to_string(),
            ..NewTaskForm::default()
        };
        assert!(matches!(form.into_task(1, now()), Err(DashError::ValidationError(_))));
    }

    #[test]
    fn test_new_task_defaults() {
        let form = NewTaskForm {
            title: " Write report ".to_string(),
            tags: vec!["Docs".to_string(), " ".to_string(), "docs".to_string()],
            ..NewTaskForm::default()
        };
        let task = form.into_task(5, now()).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.tags.len(), 1);
        assert_eq!(task.created_at, now());
    }

    #[test]
    fn test_submit_appends_and_closes() {
        let mut store: Store<Task> = Store::default();
        let mut view = ViewState::new(&[], "");
        view.open_modal(ModalId::NewTask, None);

        let task = NewTaskForm {
            title: "A".to_string(),
            ..NewTaskForm::default()
        }
        .into_task(store.next_id().unwrap(), now())
        .unwrap();
        submit(&mut store, &mut view, ModalId::NewTask, task).unwrap();

        assert_eq!(store.len(), 1);
        assert!(!view.is_modal_open(ModalId::NewTask));
    }

    #[test]
    fn test_rejected_submit_keeps_modal_open() {
        let mut store: Store<Task> = Store::default();
        let mut view = ViewState::new(&[], "");
        let make = || {
            NewTaskForm {
                title: "A".to_string(),
                ..NewTaskForm::default()
            }
            .into_task(1, now())
            .unwrap()
        };
        view.open_modal(ModalId::NewTask, None);
        submit(&mut store, &mut view, ModalId::NewTask, make()).unwrap();

        view.open_modal(ModalId::NewTask, None);
        assert!(submit(&mut store, &mut view, ModalId::NewTask, make()).is_err());
        assert!(view.is_modal_open(ModalId::NewTask));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_new_event_in_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let event = NewEventForm::new("Standup", date, time)
            .into_event(3, TimezonePolicy::Utc)
            .unwrap();
        assert_eq!(event.starts_at, Utc.with_ymd_and_hms(2024, 3, 22, 9, 30, 0).unwrap());
        assert_eq!(TimezonePolicy::Utc.date_of(event.starts_at), date);
    }

    #[test]
    fn test_new_event_rejects_zero_duration() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let mut form = NewEventForm::new("Standup", date, time);
        form.duration_minutes = 0;
        assert!(form.into_event(1, TimezonePolicy::Utc).is_err());
    }

    #[test]
    fn test_chat_composer_ignores_blank_and_uses_next_id() {
        let mut store = Store::initialize(vec![
            ChatMessage {
                id: 4,
                content: "hi".to_string(),
                time: "10:30 AM".to_string(),
                is_sent: false,
            },
        ])
        .unwrap();
        let mut composer = ChatComposer {
            draft: "   ".to_string(),
        };
        assert_eq!(composer.send(&mut store, "10:31 AM").unwrap(), None);

        composer.draft = "hello".to_string();
        assert_eq!(composer.send(&mut store, "10:31 AM").unwrap(), Some(5));
        assert!(composer.draft.is_empty());
        assert!(store.get(5).unwrap().is_sent);
    }

    #[test]
    fn test_chat_composer_reports_exhausted_ids() {
        let mut store = Store::initialize(vec![ChatMessage {
            id: RecordId::MAX,
            content: "hi".to_string(),
            time: "10:30 AM".to_string(),
            is_sent: false,
        }])
        .unwrap();
        let mut composer = ChatComposer {
            draft: "hello".to_string(),
        };
        assert!(matches!(
            composer.send(&mut store, "10:31 AM"),
            Err(DashError::IdsExhausted { kind: "chat_message", .. })
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(composer.draft, "hello");
    }

    #[test]
    fn test_message_draft_validation() {
        let draft = MessageDraft {
            recipient: "Sarah".to_string(),
            subject: "Hi".to_string(),
            body: String::new(),
        };
        assert!(draft.into_message(1).is_err());
    }

    #[test]
    fn test_profile_and_password_validation() {
        let profile = ProfileForm {
            name: "Shubham".to_string(),
            email: "shubham@example.com".to_string(),
            role: String::new(),
        };
        assert!(profile.validate().is_ok());
        let bad = ProfileForm {
            email: "nope".to_string(),
            ..profile
        };
        assert!(bad.validate().is_err());

        let change = PasswordChange {
            current: "old-secret".to_string(),
            new: "new-secret".to_string(),
            confirm: "new-secret".to_string(),
        };
        assert!(change.validate().is_ok());
        let mismatch = PasswordChange {
            confirm: "other-secret".to_string(),
            ..change.clone()
        };
        assert!(mismatch.validate().is_err());
        let short = PasswordChange {
            new: "short".to_string(),
            confirm: "short".to_string(),
            ..change
        };
        assert!(short.validate().is_err());
    }
}
