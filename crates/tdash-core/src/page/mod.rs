//! Page compositions: a store, its view state, and the derived view.

pub mod calendar;
pub mod dashboard;
pub mod inbox;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod tasks;
pub mod team;

pub use calendar::{CalendarCell, CalendarPage};
pub use dashboard::{DashboardPage, StatusProgress, TaskStats};
pub use inbox::InboxPage;
pub use notifications::NotificationsPage;
pub use profile::ProfileSettingsPage;
pub use settings::SettingsPage;
pub use tasks::{TaskSortKey, TasksPage};
pub use team::TeamPage;

use crate::derive;
use crate::record::{Filterable, Record, Searchable};
use crate::store::Store;
use crate::view_state::ViewState;

/// A filterable, searchable list backed by one store.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub store: Store<T>,
    pub view: ViewState,
}

impl<T: Record + Filterable + Searchable> ListPage<T> {
    pub fn new(store: Store<T>, filters: &'static [&'static str]) -> Self {
        Self {
            store,
            view: ViewState::new(filters, ""),
        }
    }

    /// Records passing the active filter and search text, in store order.
    pub fn visible(&self) -> Vec<&T> {
        let filtered = derive::filter_by_tag(self.store.records(), self.view.active_filter());
        derive::search_text(filtered, self.view.search_text(), &[])
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Records matching `tag`, ignoring the active filter and search.
    pub fn count(&self, tag: &str) -> usize {
        derive::count_matching(self.store.records(), tag)
    }
}
