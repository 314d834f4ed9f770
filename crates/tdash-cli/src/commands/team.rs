//! Team roster and chat command.

use anyhow::Result;
use clap::Args;

use tdash_core::forms::MessageDraft;
use tdash_core::page::TeamPage;
use tdash_core::seed;
use tdash_core::store::Store;
use tdash_core::view_state::ModalId;

use super::{apply_filter, Session};
use crate::output;

#[derive(Args)]
pub struct TeamArgs {
    /// Role filter (all, developers, designers, managers)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Text searched in name and role
    #[arg(short, long)]
    pub search: Option<String>,

    /// Open a chat with this member
    #[arg(long)]
    pub chat: Option<u64>,

    /// Send this text into the open chat
    #[arg(long, requires = "chat")]
    pub send: Option<String>,

    /// Send a direct message to this member
    #[arg(long, requires_all = ["subject", "body"])]
    pub message: Option<u64>,

    /// Subject of the direct message
    #[arg(long)]
    pub subject: Option<String>,

    /// Body of the direct message
    #[arg(long)]
    pub body: Option<String>,
}

pub fn execute(args: TeamArgs, session: &Session) -> Result<()> {
    let ctx = &session.ctx;
    let mut page = TeamPage::new(
        Store::initialize(seed::team())?,
        Store::initialize(seed::chat())?,
    );

    if let Some(member) = args.message {
        let draft = page.open_message(member)?;
        let draft = MessageDraft {
            subject: args.subject.unwrap_or_default(),
            body: args.body.unwrap_or_default(),
            ..draft
        };
        let id = page.submit_message(draft)?;
        output::success(&format!("Message #{} sent", id));
        println!();
    }

    if let Some(member) = args.chat {
        page.open_chat(member)?;
        if let Some(text) = &args.send {
            if page.send_chat(text, ctx)?.is_none() {
                tracing::info!("Nothing to send");
            }
        }
        let recipient = page
            .roster
            .view
            .modal(ModalId::Chat)
            .context()
            .unwrap_or_default()
            .to_string();
        output::print_chat(&recipient, page.chat.records(), ctx.theme);
        return Ok(());
    }

    apply_filter(&mut page.roster.view, session.filter_for("team", args.filter.as_deref()))?;
    if let Some(text) = &args.search {
        page.roster.view.set_search_text(text);
    }
    output::print_team(&page.roster.visible(), page.online_count(), ctx.theme);
    Ok(())
}
