//! Calendar command.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;

use tdash_core::page::CalendarPage;
use tdash_core::seed;
use tdash_core::store::Store;

use super::{apply_filter, Session};
use crate::output;

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,

    /// Selected date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Event category filter (all, meeting, task, reminder, deadline, other)
    #[arg(short, long)]
    pub filter: Option<String>,
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn execute(args: CalendarArgs, session: &Session) -> Result<()> {
    let ctx = &session.ctx;
    let today = ctx.today();
    let mut page = CalendarPage::new(Store::initialize(seed::events(today, ctx.timezone))?, today);

    apply_filter(&mut page.view, session.filter_for("calendar", args.filter.as_deref()))?;
    if let Some(date) = args.date {
        page.select_date(date);
    }
    if let Some(month) = &args.month {
        page.show_month(parse_month(month)?);
    }

    output::print_month(page.month(), &page.month_grid(ctx));
    let heading = format!("Events on {}", page.selected().format("%A, %B %-d"));
    output::print_events(&heading, &page.selected_events(ctx), ctx.timezone, ctx.theme);
    output::print_events("Upcoming", &page.upcoming(ctx, 3), ctx.timezone, ctx.theme);
    Ok(())
}
