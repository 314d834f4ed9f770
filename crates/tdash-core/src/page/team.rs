//! Team roster with the chat and direct-message modals.

use tracing::{debug, info};

use crate::context::AppContext;
use crate::error::{DashError, DashResult};
use crate::forms::{self, ChatComposer, MessageDraft};
use crate::model::{ChatMessage, OutboundMessage, Presence, TeamMember};
use crate::page::ListPage;
use crate::record::RecordId;
use crate::store::Store;
use crate::view_state::ModalId;

pub const FILTERS: &[&str] = &["developers", "designers", "managers"];

#[derive(Debug, Clone)]
pub struct TeamPage {
    pub roster: ListPage<TeamMember>,
    pub chat: Store<ChatMessage>,
    pub composer: ChatComposer,
    pub outbox: Store<OutboundMessage>,
}

impl TeamPage {
    pub fn new(members: Store<TeamMember>, chat: Store<ChatMessage>) -> Self {
        Self {
            roster: ListPage::new(members, FILTERS),
            chat,
            composer: ChatComposer::default(),
            outbox: Store::default(),
        }
    }

    pub fn online_count(&self) -> usize {
        self.roster
            .store
            .records()
            .iter()
            .filter(|m| m.status == Presence::Online)
            .count()
    }

    fn member_name(&self, id: RecordId) -> DashResult<String> {
        self.roster
            .store
            .get(id)
            .map(|m| m.name.clone())
            .ok_or_else(|| DashError::validation(format!("No team member with id {}", id)))
    }

    /// Open the chat modal addressed to a member.
    pub fn open_chat(&mut self, member: RecordId) -> DashResult<()> {
        let name = self.member_name(member)?;
        debug!(member = %name, "Chat opened");
        self.roster.view.open_modal(ModalId::Chat, Some(name));
        Ok(())
    }

    /// Open the message modal addressed to a member, with the recipient
    /// pre-filled.
    pub fn open_message(&mut self, member: RecordId) -> DashResult<MessageDraft> {
        let name = self.member_name(member)?;
        self.roster.view.open_modal(ModalId::Message, Some(name.clone()));
        Ok(MessageDraft {
            recipient: name,
            ..MessageDraft::default()
        })
    }

    /// Send `text` into the open chat. Blank text sends nothing.
    pub fn send_chat(&mut self, text: &str, ctx: &AppContext) -> DashResult<Option<RecordId>> {
        self.composer.draft = text.to_string();
        let label = ctx.timezone.clock_label(ctx.now());
        self.composer.send(&mut self.chat, &label)
    }

    /// Submit a direct message; the modal closes only when it is accepted.
    pub fn submit_message(&mut self, draft: MessageDraft) -> DashResult<RecordId> {
        let message = draft.into_message(self.outbox.next_id()?)?;
        let id = forms::submit(&mut self.outbox, &mut self.roster.view, ModalId::Message, message)?;
        info!(id, "Message queued");
        Ok(id)
    }
}
