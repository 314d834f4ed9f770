//! Inbox command.

use anyhow::Result;
use clap::Args;

use tdash_core::page::InboxPage;
use tdash_core::seed;
use tdash_core::store::Store;

use super::{apply_filter, Session};
use crate::output;

#[derive(Args)]
pub struct InboxArgs {
    /// Filter (all, work, personal, social, starred)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Text searched in sender, subject and preview
    #[arg(short, long)]
    pub search: Option<String>,

    /// Toggle the star on a message
    #[arg(long)]
    pub star: Option<u64>,
}

pub fn execute(args: InboxArgs, session: &Session) -> Result<()> {
    let mut page = InboxPage::new(Store::initialize(seed::inbox())?);

    if let Some(id) = args.star {
        if page.toggle_star(id)? {
            output::success(&format!("Toggled star on message #{}", id));
        }
    }

    apply_filter(&mut page.list.view, session.filter_for("inbox", args.filter.as_deref()))?;
    if let Some(text) = &args.search {
        page.list.view.set_search_text(text);
    }

    output::print_inbox(&page.list.visible(), session.ctx.theme);
    Ok(())
}
