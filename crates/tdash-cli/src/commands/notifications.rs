//! Notification feed command.

use anyhow::Result;
use clap::Args;

use tdash_core::page::NotificationsPage;
use tdash_core::seed;
use tdash_core::store::Store;

use super::{apply_filter, Session};
use crate::output;

#[derive(Args)]
pub struct NotificationsArgs {
    /// Filter (all, unread, message, task, alert, mention, team, update)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Mark one notification as read
    #[arg(long)]
    pub mark_read: Option<u64>,

    /// Mark every notification as read
    #[arg(long)]
    pub mark_all_read: bool,

    /// Clear the feed
    #[arg(long)]
    pub clear: bool,
}

pub fn execute(args: NotificationsArgs, session: &Session) -> Result<()> {
    let ctx = &session.ctx;
    let mut page = NotificationsPage::new(Store::initialize(seed::notifications(ctx.now()))?);

    if let Some(id) = args.mark_read {
        if page.mark_read(id)? {
            output::success(&format!("Marked notification #{} read", id));
        } else {
            tracing::info!(id, "No such notification");
        }
    }
    if args.mark_all_read {
        page.mark_all_read()?;
        output::success("Marked all notifications read");
    }
    if args.clear {
        page.clear_all();
        output::success("Cleared all notifications");
    }

    apply_filter(&mut page.list.view, session.filter_for("notifications", args.filter.as_deref()))?;
    output::print_notifications(&page.rows(ctx.now()), page.unread_count(), ctx.theme);
    Ok(())
}
