//! View-State Controller: ephemeral UI selection state, kept apart from
//! domain data.

use std::collections::BTreeMap;

use tracing::{debug, warn};

/// Filter key that disables filtering.
pub const ALL_FILTER: &str = "all";

/// Modal dialogs a view can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalId {
    NewTask,
    NewEvent,
    ProfileSettings,
    Chat,
    Message,
}

/// Two-state modal machine. An open modal may carry a context value such
/// as the chat recipient.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { context: Option<String> },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Open { context } => context.as_deref(),
            Self::Closed => None,
        }
    }
}

/// Selection state for one view: filter, search, tab, modals and the
/// collapsible panel. Slots are independent of each other.
#[derive(Debug, Clone)]
pub struct ViewState {
    known_filters: &'static [&'static str],
    active_filter: String,
    search_text: String,
    active_tab: String,
    modals: BTreeMap<ModalId, ModalState>,
    collapsed: bool,
}

impl ViewState {
    /// Create a view state with the filter keys this view offers.
    /// [`ALL_FILTER`] is always accepted and is the initial filter.
    pub fn new(known_filters: &'static [&'static str], default_tab: &str) -> Self {
        Self {
            known_filters,
            active_filter: ALL_FILTER.to_string(),
            search_text: String::new(),
            active_tab: default_tab.to_string(),
            modals: BTreeMap::new(),
            collapsed: false,
        }
    }

    pub fn known_filters(&self) -> &'static [&'static str] {
        self.known_filters
    }

    pub fn is_known_filter(&self, tag: &str) -> bool {
        tag == ALL_FILTER || self.known_filters.contains(&tag)
    }

    /// Select a filter tag. The tag is trimmed and lowercased.
    ///
    /// Unknown tags are stored as given and derive an empty view. Returns
    /// whether the tag is one of this view's filter keys.
    pub fn set_filter(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        let known = self.is_known_filter(&tag);
        if known {
            debug!(filter = %tag, "Filter selected");
        } else {
            warn!(filter = %tag, "Unknown filter selected; view will be empty");
        }
        self.active_filter = tag;
        known
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn set_search_text(&mut self, text: &str) {
        debug!(search = text, "Search text changed");
        self.search_text = text.to_string();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_tab(&mut self, tab: &str) {
        debug!(tab, "Tab selected");
        self.active_tab = tab.to_string();
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn modal(&self, id: ModalId) -> ModalState {
        self.modals.get(&id).cloned().unwrap_or_default()
    }

    pub fn is_modal_open(&self, id: ModalId) -> bool {
        self.modal(id).is_open()
    }

    pub fn open_modal(&mut self, id: ModalId, context: Option<String>) {
        debug!(modal = ?id, ?context, "Modal opened");
        self.modals.insert(id, ModalState::Open { context });
    }

    /// Close a modal. Closing a closed modal is a no-op.
    pub fn close_modal(&mut self, id: ModalId) {
        if self.modals.remove(&id).is_some() {
            debug!(modal = ?id, "Modal closed");
        }
    }

    pub fn toggle_modal(&mut self, id: ModalId) {
        if self.is_modal_open(id) {
            self.close_modal(id);
        } else {
            self.open_modal(id, None);
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        debug!(collapsed = self.collapsed, "Panel toggled");
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILTERS: &[&str] = &["unread", "message"];

    #[test]
    fn test_defaults() {
        let state = ViewState::new(FILTERS, "overview");
        assert_eq!(state.active_filter(), ALL_FILTER);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.active_tab(), "overview");
        assert!(!state.is_collapsed());
        assert!(!state.is_modal_open(ModalId::Chat));
    }

    #[test]
    fn test_set_filter_normalizes_and_reports_unknown() {
        let mut state = ViewState::new(FILTERS, "");
        assert!(state.set_filter(" Unread "));
        assert_eq!(state.active_filter(), "unread");
        assert!(!state.set_filter("bogus"));
        assert_eq!(state.active_filter(), "bogus");
        assert!(state.set_filter("all"));
    }

    #[test]
    fn test_modal_machine() {
        let mut state = ViewState::new(FILTERS, "");
        state.toggle_modal(ModalId::NewTask);
        assert!(state.is_modal_open(ModalId::NewTask));
        state.toggle_modal(ModalId::NewTask);
        assert!(!state.is_modal_open(ModalId::NewTask));

        state.close_modal(ModalId::NewTask);
        state.close_modal(ModalId::NewTask);
        assert_eq!(state.modal(ModalId::NewTask), ModalState::Closed);
    }

    #[test]
    fn test_modal_context() {
        let mut state = ViewState::new(FILTERS, "");
        state.open_modal(ModalId::Chat, Some("Sarah Johnson".to_string()));
        assert_eq!(state.modal(ModalId::Chat).context(), Some("Sarah Johnson"));
        assert!(!state.is_modal_open(ModalId::Message));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut state = ViewState::new(FILTERS, "a");
        state.set_filter("message");
        state.set_search_text("hello");
        state.toggle_collapsed();
        state.set_tab("b");
        assert_eq!(state.active_filter(), "message");
        assert_eq!(state.search_text(), "hello");
        assert!(state.is_collapsed());
        assert_eq!(state.active_tab(), "b");
    }
}
