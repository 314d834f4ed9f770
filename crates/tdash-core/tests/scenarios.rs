//! End-to-end flows: seed a store, drive the view state, read the
//! derived view.

use chrono::{NaiveDate, TimeZone, Utc};

use tdash_core::context::{AppContext, TimezonePolicy};
use tdash_core::derive;
use tdash_core::model::notification::UNREAD_FILTER;
use tdash_core::model::{Event, EventCategory, Notification, Task};
use tdash_core::page::{CalendarPage, NotificationsPage, TasksPage};
use tdash_core::store::Store;
use tdash_core::DashError;

fn task_seed() -> Vec<Task> {
    serde_json::from_str(
        r#"[
            {"id": 1, "title": "Ship release notes", "status": "completed", "priority": "high",
             "dueDate": "2024-03-18", "createdAt": "2024-03-10T09:00:00Z"},
            {"id": 2, "title": "Review API design", "status": "in_progress", "priority": "medium",
             "dueDate": null, "createdAt": "2024-03-11T09:00:00Z"},
            {"id": 3, "title": "Fix login bug", "status": "in_progress", "priority": "urgent",
             "dueDate": "2024-03-21", "createdAt": "2024-03-12T09:00:00Z"},
            {"id": 4, "title": "Renew certificates", "status": "overdue", "priority": "high",
             "dueDate": "2024-03-15", "createdAt": "2024-03-01T09:00:00Z"}
        ]"#,
    )
    .unwrap()
}

#[test]
fn in_progress_filter_keeps_seed_order() {
    let store = Store::initialize(task_seed()).unwrap();
    let ids: Vec<_> = derive::filter_by_tag(store.records(), "in_progress")
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let mut page = TasksPage::new(store);
    page.list.view.set_filter("in_progress");
    let ids: Vec<_> = page.list.visible().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

fn notification(id: u64, unread: bool) -> Notification {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "type": "alert",
        "title": format!("Notice {id}"),
        "message": "Something happened",
        "time": "2024-03-20T10:00:00Z",
        "unread": unread,
    }))
    .unwrap()
}

#[test]
fn unread_filter_then_clear_all() {
    let seed = vec![
        notification(1, true),
        notification(2, false),
        notification(3, true),
        notification(4, false),
        notification(5, true),
    ];
    let mut page = NotificationsPage::new(Store::initialize(seed).unwrap());

    page.list.view.set_filter(UNREAD_FILTER);
    let ids: Vec<_> = page.list.visible().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(page.unread_count(), 3);

    page.list.view.set_search_text("notice");
    page.clear_all();
    assert!(page.list.visible().is_empty());

    page.list.view.set_filter("all");
    page.list.view.set_search_text("");
    assert!(page.list.visible().is_empty());
}

fn event(id: u64, starts_at: chrono::DateTime<Utc>) -> Event {
    Event {
        id,
        title: format!("Event {id}"),
        description: String::new(),
        starts_at,
        duration_minutes: 30,
        location: String::new(),
        attendees: 2,
        category: EventCategory::Meeting,
    }
}

#[test]
fn calendar_groups_by_utc_day() {
    let events = vec![
        event(1, Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap()),
        event(2, Utc.with_ymd_and_hms(2024, 3, 22, 13, 0, 0).unwrap()),
        event(3, Utc.with_ymd_and_hms(2024, 3, 20, 23, 30, 0).unwrap()),
    ];
    let tz = TimezonePolicy::Utc;
    let groups = tz.group_by_date(&events, |e| e.starts_at);

    let march_20 = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let march_22 = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&march_20].iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(groups[&march_22].len(), 1);

    let ctx = AppContext {
        timezone: tz,
        ..AppContext::default()
    }
    .with_now(Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap());
    let mut page = CalendarPage::new(Store::initialize(events).unwrap(), ctx.today());
    assert_eq!(page.selected_events(&ctx).len(), 2);

    page.select_date(NaiveDate::from_ymd_opt(2024, 3, 21).unwrap());
    assert!(page.selected_events(&ctx).is_empty());
}

#[test]
fn duplicate_append_is_rejected_and_update_reads_back() {
    let mut store = Store::initialize(task_seed()).unwrap();
    let mut copy = store.get(3).unwrap().clone();
    copy.title = "Replacement".to_string();

    let err = store.append(copy).unwrap_err();
    assert!(matches!(err, DashError::DuplicateId { kind: "task", id: 3 }));
    assert_eq!(store.get(3).unwrap().title, "Fix login bug");

    assert!(store.update_by_id(3, |t| t.title = "Fix SSO login".to_string()).unwrap());
    assert_eq!(store.get(3).unwrap().title, "Fix SSO login");
    assert_eq!(store.len(), 4);

    assert!(!store.update_by_id(42, |t| t.title = "ghost".to_string()).unwrap());
}

#[test]
fn malformed_seed_fails_fast() {
    let mut seed = task_seed();
    seed[1].title = "  ".to_string();
    let err = Store::initialize(seed).unwrap_err();
    assert!(matches!(err, DashError::SchemaViolation { kind: "task", id: 2, .. }));

    let seed: Vec<Task> = serde_json::from_str(
        r#"[{"id": 9, "title": "Odd", "status": "archived", "priority": "low",
             "dueDate": null, "createdAt": "2024-03-10T09:00:00Z"}]"#,
    )
    .unwrap();
    assert!(Store::initialize(seed.clone()).is_err());
    assert_eq!(Store::initialize_unchecked(seed).len(), 1);
}
