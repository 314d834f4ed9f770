//! Task list with status filters, search, sorting and the new-task modal.

use chrono::NaiveDate;

use crate::context::AppContext;
use crate::derive::{self, SortDirection};
use crate::error::DashResult;
use crate::forms::{self, NewTaskForm};
use crate::model::Task;
use crate::page::ListPage;
use crate::record::RecordId;
use crate::store::Store;
use crate::view_state::ModalId;

pub const FILTERS: &[&str] = &["todo", "in_progress", "completed", "overdue"];

/// Sortable task columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    DueDate,
    Priority,
    Title,
    Created,
}

impl TaskSortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "due" | "due_date" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            "title" => Some(Self::Title),
            "created" => Some(Self::Created),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TasksPage {
    pub list: ListPage<Task>,
    pub sort: Option<(TaskSortKey, SortDirection)>,
}

impl TasksPage {
    pub fn new(store: Store<Task>) -> Self {
        Self {
            list: ListPage::new(store, FILTERS),
            sort: None,
        }
    }

    pub fn set_sort(&mut self, key: TaskSortKey, direction: SortDirection) {
        self.sort = Some((key, direction));
    }

    /// Filtered, searched, then sorted tasks. Tasks without a due date
    /// sort after dated ones when ascending.
    pub fn visible(&self) -> Vec<&Task> {
        let visible = self.list.visible();
        let Some((key, direction)) = self.sort else {
            return visible;
        };
        match key {
            TaskSortKey::DueDate => derive::sort_by(
                visible,
                |t| (t.due_date.is_none(), t.due_date.unwrap_or(NaiveDate::MAX)),
                direction,
            ),
            TaskSortKey::Priority => derive::sort_by(visible, |t| t.priority.rank(), direction),
            TaskSortKey::Title => derive::sort_by(visible, |t| t.title.to_lowercase(), direction),
            TaskSortKey::Created => derive::sort_by(visible, |t| t.created_at, direction),
        }
    }

    pub fn open_new_task(&mut self) {
        self.list.view.open_modal(ModalId::NewTask, None);
    }

    /// Submit the new-task form: the task gets the next free id, lands at
    /// the end of the list, and the modal closes.
    pub fn submit_new_task(&mut self, form: NewTaskForm, ctx: &AppContext) -> DashResult<RecordId> {
        let task = form.into_task(self.list.store.next_id()?, ctx.now())?;
        forms::submit(&mut self.list.store, &mut self.list.view, ModalId::NewTask, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TaskStatus};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    fn page() -> (TasksPage, AppContext) {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let ctx = AppContext::default().with_now(now);
        (TasksPage::new(Store::initialize(seed::tasks(now)).unwrap()), ctx)
    }

    fn ids(tasks: &[&Task]) -> Vec<RecordId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_status_filter() {
        let (mut page, _) = page();
        page.list.view.set_filter("in_progress");
        assert_eq!(ids(&page.visible()), vec![2, 3]);
    }

    #[test]
    fn test_search_matches_tags() {
        let (mut page, _) = page();
        page.list.view.set_search_text("MOBILE");
        assert_eq!(ids(&page.visible()), vec![3, 8]);
        page.list.view.set_search_text("bug");
        assert_eq!(ids(&page.visible()), vec![3]);
    }

    #[test]
    fn test_sort_by_priority_desc_keeps_ties_in_order() {
        let (mut page, _) = page();
        page.set_sort(TaskSortKey::Priority, SortDirection::Descending);
        // urgent, then the three highs in list order, then mediums, then low
        assert_eq!(ids(&page.visible()), vec![3, 1, 6, 8, 2, 4, 7, 5]);
    }

    #[test]
    fn test_sort_by_due_puts_undated_last() {
        let (mut page, _) = page();
        page.set_sort(TaskSortKey::DueDate, SortDirection::Ascending);
        let visible = page.visible();
        assert_eq!(visible.first().map(|t| t.id), Some(7));
        assert_eq!(visible.last().map(|t| t.id), Some(8));
    }

    #[test]
    fn test_submit_new_task() {
        let (mut page, ctx) = page();
        page.open_new_task();
        let form = NewTaskForm {
            title: "Write release notes".to_string(),
            priority: Priority::High,
            ..NewTaskForm::default()
        };
        let id = page.submit_new_task(form, &ctx).unwrap();
        assert_eq!(id, 9);
        assert!(!page.list.view.is_modal_open(ModalId::NewTask));
        let task = page.list.store.get(9).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(page.list.visible().last().map(|t| t.id), Some(9));
    }

    #[test]
    fn test_invalid_form_keeps_modal_open() {
        let (mut page, ctx) = page();
        page.open_new_task();
        assert!(page.submit_new_task(NewTaskForm::default(), &ctx).is_err());
        assert!(page.list.view.is_modal_open(ModalId::NewTask));
    }
}
