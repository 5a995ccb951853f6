//! Client-side conversation state for the portal dashboards. Each
//! dashboard (parent, teacher, volunteer) owns one [`ConversationView`]:
//! a contact roster, a flat message log, the active selection and the
//! input draft. The view exposes no network or rendering surface; a UI
//! layer drives it and a messaging backend eventually replaces the
//! seeded store.

pub mod libs;

use log::debug;
use thiserror::Error;

use crate::libs::storage::memory::MemoryStore;

pub use crate::libs::conversation::{ConversationView, SendError};
pub use crate::libs::core::models::{
    Contact, ContactId, DashboardRole, Direction, Message, MessageId, Party,
};
pub use crate::libs::storage::storage_traits::{
    ChatStore, ContactDirectory, MessageStore, StoreError,
};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Send(#[from] SendError),
}

/// Opens the chat for one dashboard: seeded roster and log via the
/// in-memory store, with the dashboard's default contact selected.
pub fn open_chat(role: DashboardRole) -> Result<ConversationView, ChatError> {
    debug!("opening {} chat", role);
    let mut store = MemoryStore::new();
    let mut view = ConversationView::from_store(&mut store, role)?;
    if let Some(id) = libs::seed::default_selection(role) {
        view.select_contact(id);
    }
    Ok(view)
}

/// Sends `content` to the view's active contact and reports the new
/// message id.
pub fn send_message(view: &mut ConversationView, content: &str) -> Result<MessageId, ChatError> {
    let id = view.send(content)?;
    Ok(id)
}

/// Clears the unread badge for one contact without changing the
/// selection. Returns false when the contact is unknown.
pub fn mark_conversation_read(view: &mut ConversationView, contact: ContactId) -> bool {
    view.mark_read(contact)
}
