//! Dashboard overview: stats cards, status progress, recent tasks and
//! the activity timeline, all derived from the stores.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::derive::{self, SortDirection};
use crate::model::{Activity, Task, TaskStatus};
use crate::record::UNKNOWN_BUCKET;
use crate::store::Store;

/// Values behind the stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    /// Tasks whose status is outside the closed set.
    pub unknown: usize,
}

/// Share of tasks in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusProgress {
    pub status: TaskStatus,
    pub count: usize,
    pub percent: u8,
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub tasks: Store<Task>,
    pub activities: Store<Activity>,
}

impl DashboardPage {
    pub fn new(tasks: Store<Task>, activities: Store<Activity>) -> Self {
        Self { tasks, activities }
    }

    pub fn stats(&self) -> TaskStats {
        let buckets: BTreeMap<&str, usize> = derive::count_by_bucket(self.tasks.records());
        let count = |status: TaskStatus| buckets.get(status.as_str()).copied().unwrap_or(0);
        TaskStats {
            total: self.tasks.len(),
            todo: count(TaskStatus::Todo),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
            overdue: count(TaskStatus::Overdue),
            unknown: buckets.get(UNKNOWN_BUCKET).copied().unwrap_or(0),
        }
    }

    /// Per-status share of all tasks, in workflow order.
    pub fn progress(&self) -> Vec<StatusProgress> {
        let stats = self.stats();
        TaskStatus::ALL
            .iter()
            .map(|&status| {
                let count = match status {
                    TaskStatus::Todo => stats.todo,
                    TaskStatus::InProgress => stats.in_progress,
                    TaskStatus::Completed => stats.completed,
                    TaskStatus::Overdue => stats.overdue,
                    TaskStatus::Unknown => stats.unknown,
                };
                StatusProgress {
                    status,
                    count,
                    percent: derive::percentage(count, stats.total),
                }
            })
            .collect()
    }

    /// Most recently created tasks first.
    pub fn recent_tasks(&self, limit: usize) -> Vec<&Task> {
        let mut recent = derive::sort_by(
            self.tasks.records(),
            |t| t.created_at,
            SortDirection::Descending,
        );
        recent.truncate(limit);
        recent
    }

    /// Activity entries, newest first, with relative time labels.
    pub fn timeline(&self, now: DateTime<Utc>) -> Vec<(&Activity, String)> {
        derive::sort_by(self.activities.records(), |a| a.at, SortDirection::Descending)
            .into_iter()
            .map(|a| (a, derive::time_ago(a.at, now)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    fn page() -> (DashboardPage, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let page = DashboardPage::new(
            Store::initialize(seed::tasks(now)).unwrap(),
            Store::initialize(seed::activities(now)).unwrap(),
        );
        (page, now)
    }

    #[test]
    fn test_stats() {
        let (page, _) = page();
        assert_eq!(
            page.stats(),
            TaskStats {
                total: 8,
                todo: 3,
                in_progress: 2,
                completed: 2,
                overdue: 1,
                unknown: 0,
            }
        );
    }

    #[test]
    fn test_unknown_status_counted_separately() {
        let (mut page, now) = page();
        let mut tasks = seed::tasks(now);
        tasks[0].status = TaskStatus::Unknown;
        page.tasks = Store::initialize_unchecked(tasks);
        assert_eq!(page.stats().unknown, 1);
        assert_eq!(page.stats().completed, 1);
    }

    #[test]
    fn test_progress_percentages() {
        let (page, _) = page();
        let percents: Vec<u8> = page.progress().iter().map(|p| p.percent).collect();
        assert_eq!(percents, vec![37, 25, 25, 12]);
    }

    #[test]
    fn test_recent_tasks_newest_first() {
        let (page, _) = page();
        let ids: Vec<u64> = page.recent_tasks(3).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![8, 5, 4]);
    }

    #[test]
    fn test_timeline_labels() {
        let (page, now) = page();
        let labels: Vec<String> = page.timeline(now).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["10m ago", "1h ago", "2h ago", "1d ago", "2d ago"]);
    }
}
