//! Task list command.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use tdash_core::derive::SortDirection;
use tdash_core::forms::NewTaskForm;
use tdash_core::model::Priority;
use tdash_core::page::{TaskSortKey, TasksPage};
use tdash_core::seed;
use tdash_core::store::Store;

use super::{apply_filter, Session};
use crate::output;

#[derive(Args)]
pub struct TasksArgs {
    /// Status filter (all, todo, in_progress, completed, overdue)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Case-insensitive text searched in title, description and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort column (due, priority, title, created)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Create a task with this title before listing
    #[arg(long)]
    pub add: Option<String>,

    /// Priority of the new task (low, medium, high, urgent)
    #[arg(long, default_value = "medium")]
    pub priority: String,

    /// Due date of the new task (YYYY-MM-DD)
    #[arg(long, requires = "add")]
    pub due: Option<NaiveDate>,

    /// Comma-separated tags of the new task
    #[arg(long, value_delimiter = ',', requires = "add")]
    pub tags: Vec<String>,
}

pub fn execute(args: TasksArgs, session: &Session) -> Result<()> {
    let ctx = &session.ctx;
    let mut page = TasksPage::new(Store::initialize(seed::tasks(ctx.now()))?);

    if let Some(title) = args.add {
        let priority = Priority::from_str(&args.priority);
        if priority == Priority::Unknown {
            return Err(anyhow!(
                "Unknown priority '{}'. Valid: low, medium, high, urgent",
                args.priority
            ));
        }
        page.open_new_task();
        let form = NewTaskForm {
            title,
            due_date: args.due,
            priority,
            tags: args.tags,
            ..NewTaskForm::default()
        };
        let id = page.submit_new_task(form, ctx)?;
        output::success(&format!("Created task #{}", id.to_string().cyan()));
        println!();
    }

    apply_filter(&mut page.list.view, session.filter_for("tasks", args.filter.as_deref()))?;
    if let Some(text) = &args.search {
        page.list.view.set_search_text(text);
    }
    if let Some(sort) = &args.sort {
        let key = TaskSortKey::parse(sort)
            .ok_or_else(|| {
                anyhow!("Unknown sort '{}'. Valid: due, priority, title, created", sort)
            })?;
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        page.set_sort(key, direction);
    }

    output::print_tasks_table(&page.visible(), page.list.total(), ctx.theme);
    Ok(())
}
