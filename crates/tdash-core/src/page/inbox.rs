//! Inbox message list.

use crate::error::DashResult;
use crate::model::message::STARRED_FILTER;
use crate::model::InboxMessage;
use crate::page::ListPage;
use crate::record::RecordId;
use crate::store::Store;

pub const FILTERS: &[&str] = &["work", "personal", "social", STARRED_FILTER];

#[derive(Debug, Clone)]
pub struct InboxPage {
    pub list: ListPage<InboxMessage>,
}

impl InboxPage {
    pub fn new(store: Store<InboxMessage>) -> Self {
        Self {
            list: ListPage::new(store, FILTERS),
        }
    }

    pub fn toggle_star(&mut self, id: RecordId) -> DashResult<bool> {
        self.list.store.update_by_id(id, |m| m.is_starred = !m.is_starred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_filter_and_search_compose() {
        let mut page = InboxPage::new(Store::initialize(seed::inbox()).unwrap());
        page.list.view.set_search_text("weekend");
        assert_eq!(page.list.visible().len(), 1);

        page.list.view.set_filter("work");
        assert!(page.list.visible().is_empty());

        page.list.view.set_filter("personal");
        assert_eq!(page.list.visible()[0].sender, "Sarah Wilson");
    }

    #[test]
    fn test_starred_filter() {
        let mut page = InboxPage::new(Store::initialize(seed::inbox()).unwrap());
        page.list.view.set_filter(STARRED_FILTER);
        assert_eq!(page.list.visible().len(), 1);

        page.toggle_star(3).unwrap();
        assert_eq!(page.list.visible().len(), 2);
    }
}
