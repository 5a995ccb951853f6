use log::debug;
use thiserror::Error;

use crate::libs::core::models::{Contact, ContactId, DashboardRole, Message, MessageId};
use crate::libs::outbox;
use crate::libs::storage::storage_traits::{ChatStore, StoreError};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("message text is empty")]
    EmptyMessage,
    #[error("no contact is selected")]
    NoContactSelected,
}

/// Client-side state of one dashboard chat: the contact roster, the flat
/// message log, the active selection and the input draft. Transitions are
/// synchronous and go through `&mut self`; the derived conversation is
/// recomputed from the log on every call.
#[derive(Clone, Debug)]
pub struct ConversationView {
    roster: Vec<Contact>,
    log: Vec<Message>,
    selected: Option<ContactId>,
    draft: String,
    scroll_anchor: Option<MessageId>,
}

impl ConversationView {
    pub fn new(roster: Vec<Contact>, log: Vec<Message>) -> Self {
        let scroll_anchor = log.last().map(|m| m.id);
        Self {
            roster,
            log,
            selected: None,
            draft: String::new(),
            scroll_anchor,
        }
    }

    /// Builds a view from whatever backend sits behind the store seam.
    pub fn from_store<S: ChatStore>(
        store: &mut S,
        role: DashboardRole,
    ) -> Result<Self, StoreError> {
        let roster = store.load_contacts(role)?;
        let log = store.load_messages(role)?;
        debug!(
            "loaded {} chat: {} contacts, {} messages",
            role,
            roster.len(),
            log.len()
        );
        Ok(Self::new(roster, log))
    }

    /// Makes `id` the active contact. The id is not checked against the
    /// roster; an unknown id leaves the view in the fallback
    /// "select someone" state. Selecting a known contact clears its
    /// unread badge.
    pub fn select_contact(&mut self, id: ContactId) {
        debug!("selecting contact {}", id);
        self.selected = Some(id);
        if let Some(contact) = self.roster.iter_mut().find(|c| c.id == id) {
            contact.unread = 0;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ContactId> {
        self.selected
    }

    /// Header data for the active contact, or `None` when nothing valid
    /// is selected.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected
            .and_then(|id| self.roster.iter().find(|c| c.id == id))
    }

    /// Appends an outgoing message to the active conversation. The text
    /// is kept as given; only all-whitespace input is rejected. On
    /// success the contact's sidebar preview is refreshed, the scroll
    /// anchor moves to the new message, the draft is cleared and the
    /// message is handed to the delivery outbox. On error the log is
    /// untouched.
    pub fn send(&mut self, text: &str) -> Result<MessageId, SendError> {
        if text.trim().is_empty() {
            return Err(SendError::EmptyMessage);
        }
        let to = self.selected.ok_or(SendError::NoContactSelected)?;

        let message = Message::outgoing(to, text);
        let id = message.id;
        debug!("sending message {} to contact {}", id, to);

        if let Some(contact) = self.roster.iter_mut().find(|c| c.id == to) {
            contact.last_message = message.content.clone();
            contact.last_message_time = message.time_label.clone();
        }

        outbox::queue_for_delivery(&message);
        self.log.push(message);
        self.scroll_anchor = Some(id);
        self.draft.clear();
        Ok(id)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submits the input box: sends the current draft and clears it.
    pub fn send_draft(&mut self) -> Result<MessageId, SendError> {
        let text = self.draft.clone();
        self.send(&text)
    }

    /// The derived conversation: messages exchanged between the current
    /// user and the active contact, in log order. Empty when nothing is
    /// selected.
    pub fn visible_messages(&self) -> Vec<&Message> {
        match self.selected {
            Some(id) => self.log.iter().filter(|m| m.involves(id)).collect(),
            None => Vec::new(),
        }
    }

    /// The message the UI should scroll into view after the latest log
    /// change.
    pub fn scroll_anchor(&self) -> Option<MessageId> {
        self.scroll_anchor
    }

    /// Clears the unread badge of `id` without changing the selection.
    /// Returns false when the contact is not in the roster.
    pub fn mark_read(&mut self, id: ContactId) -> bool {
        match self.roster.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.unread = 0;
                true
            }
            None => false,
        }
    }

    pub fn unread_total(&self) -> u32 {
        self.roster.iter().map(|c| c.unread).sum()
    }

    pub fn roster(&self) -> &[Contact] {
        &self.roster
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }
}
