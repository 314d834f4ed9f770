//! Notifications feed.

use chrono::{DateTime, Utc};

use crate::derive;
use crate::error::DashResult;
use crate::model::notification::UNREAD_FILTER;
use crate::model::Notification;
use crate::page::ListPage;
use crate::record::RecordId;
use crate::store::Store;

pub const FILTERS: &[&str] = &[
    UNREAD_FILTER,
    "message",
    "task",
    "alert",
    "mention",
    "team",
    "update",
];

#[derive(Debug, Clone)]
pub struct NotificationsPage {
    pub list: ListPage<Notification>,
}

impl NotificationsPage {
    pub fn new(store: Store<Notification>) -> Self {
        Self {
            list: ListPage::new(store, FILTERS),
        }
    }

    /// Visible notifications with their relative time label.
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<(&Notification, String)> {
        self.list
            .visible()
            .into_iter()
            .map(|n| (n, derive::time_ago(n.time, now)))
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.list.count(UNREAD_FILTER)
    }

    /// Mark one notification read. Missing ids are ignored.
    pub fn mark_read(&mut self, id: RecordId) -> DashResult<bool> {
        self.list.store.update_by_id(id, |n| n.unread = false)
    }

    pub fn mark_all_read(&mut self) -> DashResult<()> {
        self.list.store.update_all(|n| n.unread = false)
    }

    /// Drop every notification.
    pub fn clear_all(&mut self) {
        self.list.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    fn page() -> (NotificationsPage, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        (NotificationsPage::new(Store::initialize(seed::notifications(now)).unwrap()), now)
    }

    #[test]
    fn test_rows_have_time_labels() {
        let (page, now) = page();
        let labels: Vec<String> = page.rows(now).into_iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec!["30m ago", "1h ago", "2h ago", "1d ago", "2d ago"]);
    }

    #[test]
    fn test_mark_read_updates_badge() {
        let (mut page, _) = page();
        assert_eq!(page.unread_count(), 3);
        assert!(page.mark_read(1).unwrap());
        assert!(!page.mark_read(99).unwrap());
        assert_eq!(page.unread_count(), 2);
        page.mark_all_read().unwrap();
        assert_eq!(page.unread_count(), 0);
    }

    #[test]
    fn test_type_filter() {
        let (mut page, _) = page();
        page.list.view.set_filter("alert");
        let visible = page.list.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }
}
