//! Dashboard overview command.

use anyhow::Result;
use colored::Colorize;

use tdash_core::page::DashboardPage;
use tdash_core::presentation::badge;
use tdash_core::seed;
use tdash_core::store::Store;

use super::Session;
use crate::output;

const RECENT_TASKS: usize = 3;

pub fn execute(session: &Session) -> Result<()> {
    let ctx = &session.ctx;
    let now = ctx.now();
    let page = DashboardPage::new(
        Store::initialize(seed::tasks(now))?,
        Store::initialize(seed::activities(now))?,
    );

    println!("{}", "Dashboard".bold());
    println!();
    output::print_stats(&page.stats(), &page.progress(), ctx.theme);

    println!();
    println!("{}", "Recent Tasks".bold());
    let recent = page.recent_tasks(RECENT_TASKS);
    output::print_tasks_table(&recent, page.tasks.len(), ctx.theme);

    println!();
    println!("{}", "Activity".bold());
    for (activity, ago) in page.timeline(now) {
        let b = badge(activity.status);
        println!(
            "  {} {} {}",
            output::paint("●", b.color, ctx.theme),
            activity.title,
            ago.dimmed()
        );
    }
    Ok(())
}
